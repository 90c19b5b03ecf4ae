//! Curves fitted through a short window of upcoming objects.

mod arc;
pub mod factory;
mod line;

pub use arc::ArcMover;
pub use line::LineMover;

use crate::{error::*, hit::*, timing::*, utils::*};

use core::iter::once as iter_once;

use bevy::prelude::*;
use derive_more::Deref;
use tap::Pipe;
use tinyvec::ArrayVec;

pub const MAX_WINDOW: usize = 3;

/// Any curve needs at least two anchors.
const MIN_WINDOW: usize = 2;

/// Ordered run of consecutive objects a curve is built from.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct Window(ArrayVec<[HitPoint; MAX_WINDOW]>);

impl Window {
    /// Takes `size` objects starting at `start`.
    ///
    /// Without a predecessor (`None`) there is nothing to pad the front with, so
    /// the window only reaches up to the object that would have been its middle.
    pub fn seed(objects: &[HitPoint], start: Option<usize>, size: usize) -> Result<Self> {
        debug_assert!((MIN_WINDOW..=MAX_WINDOW).contains(&size));

        let (start, len) = match start {
            None => (0, (size - 1).max(MIN_WINDOW)),
            Some(start) => (start, size),
        };

        objects
            .get(start..start + len)
            .map(|items| items.iter().copied().collect::<ArrayVec<_>>())
            .map(Window)
            .ok_or(DanceError::WindowOutOfBounds {
                start,
                len,
                available: objects.len(),
            })
    }

    pub fn between(start: HitPoint, end: HitPoint) -> Self {
        [start, end].into_iter().collect::<ArrayVec<_>>().pipe(Window)
    }

    /// Slides forward: the trailing `size - 1` objects followed by `next`.
    pub fn advance(&self, next: HitPoint, size: usize) -> Self {
        self.iter()
            .skip(self.len().saturating_sub(size - 1))
            .copied()
            .chain(iter_once(next))
            .collect::<ArrayVec<_>>()
            .pipe(Window)
    }

    pub fn first(&self) -> HitPoint {
        self.0[0]
    }

    pub fn last(&self) -> HitPoint {
        self.0[FromEnd(0)]
    }

    pub fn span(&self) -> Span {
        Span::new(self.first(), self.last())
    }
}

#[derive(Debug, Clone)]
pub enum PolyMover {
    Line(LineMover),
    Arc(ArcMover),
}

impl PolyMover {
    pub fn window(&self) -> &Window {
        match self {
            Self::Line(mover) => mover.window(),
            Self::Arc(mover) => mover.window(),
        }
    }

    pub fn items(&self) -> &[HitPoint] {
        self.window().as_slice()
    }

    pub fn span(&self) -> Span {
        self.window().span()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Line(_) => "Line",
            Self::Arc(_) => "Arc",
        }
    }

    pub fn point_at(&self, time: P32) -> Vec2 {
        match self {
            Self::Line(mover) => mover.point_at(time),
            Self::Arc(mover) => mover.point_at(time),
        }
    }
}
