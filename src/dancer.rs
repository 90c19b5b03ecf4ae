//! Drives the cursor through the object stream once per frame.

use crate::{
    hit::*,
    movers::{Direction, Mover, MoverKind},
    polymover::factory::{FactoryKind, PolyMoverFactory},
    timing::*,
    utils::*,
};

use bevy::{
    log::{debug, trace, warn},
    prelude::*,
};
use derive_more::{Deref, DerefMut, From};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DanceMode {
    /// One curve per pair of consecutive objects.
    Single(MoverKind),
    /// Curves fitted through a sliding window of objects.
    Poly(FactoryKind),
}

impl Default for DanceMode {
    fn default() -> Self {
        Self::Poly(FactoryKind::Arcs)
    }
}

/// Which way circular movers turn on each segment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DirectionPolicy {
    Left,
    Right,
    #[default]
    Alternate,
}

impl DirectionPolicy {
    pub fn direction_at(self, index: usize) -> Direction {
        match self {
            Self::Left => Direction::CounterClockwise,
            Self::Right => Direction::Clockwise,
            Self::Alternate if index % 2 == 0 => Direction::CounterClockwise,
            Self::Alternate => Direction::Clockwise,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Resource)]
pub struct DanceSettings {
    pub mode: DanceMode,
    pub direction: DirectionPolicy,
}

/// Where the cursor should be drawn this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut, From, Resource)]
pub struct CursorPosition(pub Vec2);

#[derive(Default)]
enum Choreography {
    #[default]
    Idle,
    Single {
        index: usize,
        dir: Direction,
        mover: Mover,
    },
    Poly {
        kind: FactoryKind,
        factory: Box<dyn PolyMoverFactory>,
    },
}

#[derive(Default, Resource)]
pub struct Dancer {
    choreography: Choreography,
}

impl Dancer {
    pub fn reset(&mut self) {
        self.choreography = Choreography::Idle;
    }

    /// First object of the segment the cursor is currently on.
    fn segment_start<'a>(&self, objects: &'a [HitPoint]) -> Option<&'a HitPoint> {
        match &self.choreography {
            Choreography::Idle => None,
            Choreography::Single { index, .. } => objects.get(*index),
            Choreography::Poly { factory, .. } => factory
                .latest_index()
                .checked_sub(1)
                .and_then(|index| objects.get(index)),
        }
    }

    /// `None` if there is nothing to dance through or no curve could be seeded.
    ///
    /// Takes [`HitObjects`] rather than any slice: the window only slides onto
    /// objects that differ from its last one.
    pub fn position_at(
        &mut self,
        objects: &HitObjects,
        settings: &DanceSettings,
        time: P32,
    ) -> Option<Vec2> {
        let objects: &[HitPoint] = objects;
        let (first, last) = (*objects.first()?, *objects.last()?);

        if self.segment_start(objects).map_or(false, |start| time < start.time) {
            debug!("song time went back to {}, restarting the dance", time.raw());
            self.reset();
        }

        if time <= first.time {
            return Some(first.position);
        }

        if last.time <= time {
            return Some(last.position);
        }

        match settings.mode {
            DanceMode::Single(kind) => Some(self.single(objects, kind, settings.direction, time)),
            DanceMode::Poly(kind) => self.poly(objects, kind, time),
        }
    }

    /// Expects `objects[0].time <= time < objects[FromEnd(0)].time`.
    fn single(
        &mut self,
        objects: &[HitPoint],
        kind: MoverKind,
        policy: DirectionPolicy,
        time: P32,
    ) -> Vec2 {
        let index = objects
            .partition_point(|object| object.time <= time)
            .saturating_sub(1);
        let dir = policy.direction_at(index);

        let mover = match std::mem::take(&mut self.choreography) {
            Choreography::Single { index: active, dir: active_dir, mover }
                if active == index && active_dir == dir && mover.kind() == kind =>
            {
                mover
            }
            _ => {
                trace!("{kind} mover on segment {index}, {dir:?}");
                kind.build(objects[index], objects[index + 1], dir)
            }
        };

        let position = mover.point_at(time);
        self.choreography = Choreography::Single { index, dir, mover };
        position
    }

    fn poly(&mut self, objects: &[HitPoint], kind: FactoryKind, time: P32) -> Option<Vec2> {
        if !matches!(&self.choreography, Choreography::Poly { kind: active, .. } if *active == kind) {
            self.reset();

            let mut factory = kind.build();
            if let Err(err) = factory.init(objects, None) {
                warn!("could not start dancing with {factory}: {err}");
                return None;
            }

            debug!("dancing with {factory}");
            self.choreography = Choreography::Poly { kind, factory };
        }

        let Choreography::Poly { factory, .. } = &mut self.choreography else {
            return None;
        };

        while let Some(next) = objects.get(factory.latest_index() + 1) {
            let latest = factory.latest_index();
            if time < objects[latest].time {
                break;
            }

            factory.update(*next);

            // Repeated objects leave the window where it is
            if factory.latest_index() == latest {
                break;
            }
        }

        factory.point_at(time)
    }
}

pub fn dance_cursor(
    time: Res<SongTime>,
    objects: Res<HitObjects>,
    settings: Res<DanceSettings>,
    mut dancer: ResMut<Dancer>,
    mut cursor: ResMut<CursorPosition>,
) {
    if objects.is_changed() || settings.is_changed() {
        dancer.reset();
    }

    if let Some(position) = dancer.position_at(&objects, &settings, **time) {
        **cursor = position;
    }
}

pub struct DancePlugin;

impl Plugin for DancePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SongTime>()
            .init_resource::<HitObjects>()
            .init_resource::<DanceSettings>()
            .init_resource::<Dancer>()
            .init_resource::<CursorPosition>()
            .add_system(dance_cursor);
    }
}
