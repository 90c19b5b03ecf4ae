//! Sliding window controllers that pick the curve for each new object.

use super::{ArcMover, LineMover, PolyMover, Window};
use crate::{error::*, hit::*, utils::*};

use std::fmt;

use bevy::{
    log::{debug, trace, warn},
    prelude::*,
};
use derive_more::Display;

pub trait PolyMoverFactory: fmt::Display + Send + Sync {
    /// Seeds the first curve. `start` is `None` when the first object has no
    /// predecessor to start the window with.
    fn init(&mut self, objects: &[HitPoint], start: Option<usize>) -> Result<()>;

    /// Slides the window onto `next`, ignored if `next` is already its last object.
    fn update(&mut self, next: HitPoint);

    fn point_at(&mut self, time: P32) -> Option<Vec2>;

    fn is_initialized(&self) -> bool;

    /// Index of the newest object taken into the window.
    fn latest_index(&self) -> usize;

    fn preferred_buffer_size(&self) -> usize;
}

/// The curve in use and, for one query after an update, the one it replaced.
#[derive(Debug, Clone, Default)]
pub enum Transition {
    #[default]
    Unseeded,
    Seeded(PolyMover),
    Transitioning {
        previous: PolyMover,
        current: PolyMover,
    },
    Steady(PolyMover),
}

impl Transition {
    pub fn current(&self) -> Option<&PolyMover> {
        match self {
            Self::Unseeded => None,
            Self::Seeded(current) | Self::Steady(current) | Self::Transitioning { current, .. } => {
                Some(current)
            }
        }
    }

    pub fn previous(&self) -> Option<&PolyMover> {
        match self {
            Self::Transitioning { previous, .. } => Some(previous),
            _ => None,
        }
    }

    fn advance(&mut self, next: PolyMover) {
        *self = match std::mem::take(self) {
            Self::Unseeded => Self::Seeded(next),
            Self::Seeded(previous)
            | Self::Steady(previous)
            | Self::Transitioning { current: previous, .. } => Self::Transitioning {
                previous,
                current: next,
            },
        }
    }

    /// Blends both curves half and half while transitioning, then drops the old one.
    fn point_at(&mut self, time: P32) -> Option<Vec2> {
        match std::mem::take(self) {
            Self::Unseeded => None,
            Self::Transitioning { previous, current } => {
                let point = (previous.point_at(time) + current.point_at(time)) * 0.5;
                *self = Self::Steady(current);
                Some(point)
            }
            state => {
                let point = state.current().map(|current| current.point_at(time));
                *self = state;
                point
            }
        }
    }
}

fn seed(
    factory: &dyn PolyMoverFactory,
    objects: &[HitPoint],
    start: Option<usize>,
) -> Result<Window> {
    Window::seed(objects, start, factory.preferred_buffer_size())
        .map_err(|err| {
            warn!("{factory} could not be seeded: {err}");
            err
        })
        .map(|window| {
            debug!("{factory} seeded with {} objects", window.len());
            window
        })
}

/// Circular arcs through every three consecutive objects, straight lines where
/// no circle fits.
#[derive(Debug, Default, Clone)]
pub struct ArcFactory {
    transition: Transition,
    latest_index: usize,
}

impl ArcFactory {
    pub const PREFERRED_BUFFER_SIZE: usize = 3;

    pub fn can_circle_exist_between_items(a: &HitPoint, b: &HitPoint, c: &HitPoint) -> bool {
        math::circle_through(a.position, b.position, c.position).is_some()
    }

    fn fit(window: Window) -> PolyMover {
        let arc = match *window.as_slice() {
            [start, middle, end] if Self::can_circle_exist_between_items(&start, &middle, &end) => {
                ArcMover::new(start, middle, end)
            }
            _ => None,
        };

        match arc {
            Some(arc) => PolyMover::Arc(arc),
            None => {
                trace!("no arc fits {} objects, falling back to a line", window.len());
                PolyMover::Line(LineMover::new(window))
            }
        }
    }

    pub fn current(&self) -> Option<&PolyMover> {
        self.transition.current()
    }

    pub fn previous(&self) -> Option<&PolyMover> {
        self.transition.previous()
    }
}

impl fmt::Display for ArcFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Arcs")
    }
}

impl PolyMoverFactory for ArcFactory {
    fn init(&mut self, objects: &[HitPoint], start: Option<usize>) -> Result<()> {
        let window = seed(&*self, objects, start)?;

        self.latest_index = start.unwrap_or_default() + window.len() - 1;
        self.transition = Transition::Seeded(Self::fit(window));
        Ok(())
    }

    fn update(&mut self, next: HitPoint) {
        let Some(window) = self.current().map(PolyMover::window) else {
            warn!("{} updated before being seeded", self);
            return;
        };

        if window.last() == next {
            return;
        }

        let current = Self::fit(window.advance(next, Self::PREFERRED_BUFFER_SIZE));
        self.transition.advance(current);
        self.latest_index += 1;
    }

    fn point_at(&mut self, time: P32) -> Option<Vec2> {
        self.transition.point_at(time)
    }

    fn is_initialized(&self) -> bool {
        self.current().is_some()
    }

    fn latest_index(&self) -> usize {
        self.latest_index
    }

    fn preferred_buffer_size(&self) -> usize {
        Self::PREFERRED_BUFFER_SIZE
    }
}

/// Straight lines between consecutive objects.
#[derive(Debug, Default, Clone)]
pub struct LineFactory {
    transition: Transition,
    latest_index: usize,
}

impl LineFactory {
    pub const PREFERRED_BUFFER_SIZE: usize = 2;

    pub fn current(&self) -> Option<&PolyMover> {
        self.transition.current()
    }

    pub fn previous(&self) -> Option<&PolyMover> {
        self.transition.previous()
    }
}

impl fmt::Display for LineFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Lines")
    }
}

impl PolyMoverFactory for LineFactory {
    fn init(&mut self, objects: &[HitPoint], start: Option<usize>) -> Result<()> {
        let window = seed(&*self, objects, start)?;

        self.latest_index = start.unwrap_or_default() + window.len() - 1;
        self.transition = Transition::Seeded(PolyMover::Line(LineMover::new(window)));
        Ok(())
    }

    fn update(&mut self, next: HitPoint) {
        let Some(window) = self.current().map(PolyMover::window) else {
            warn!("{} updated before being seeded", self);
            return;
        };

        if window.last() == next {
            return;
        }

        let current = LineMover::new(window.advance(next, Self::PREFERRED_BUFFER_SIZE));
        self.transition.advance(PolyMover::Line(current));
        self.latest_index += 1;
    }

    fn point_at(&mut self, time: P32) -> Option<Vec2> {
        self.transition.point_at(time)
    }

    fn is_initialized(&self) -> bool {
        self.current().is_some()
    }

    fn latest_index(&self) -> usize {
        self.latest_index
    }

    fn preferred_buffer_size(&self) -> usize {
        Self::PREFERRED_BUFFER_SIZE
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
pub enum FactoryKind {
    #[default]
    #[display(fmt = "Arcs")]
    Arcs,
    #[display(fmt = "Lines")]
    Lines,
}

impl FactoryKind {
    /// Menu order
    pub const ALL: [FactoryKind; 2] = [Self::Arcs, Self::Lines];

    pub fn build(self) -> Box<dyn PolyMoverFactory> {
        match self {
            Self::Arcs => Box::<ArcFactory>::default(),
            Self::Lines => Box::<LineFactory>::default(),
        }
    }
}
