use crate::{hit::*, utils::*};

use bevy::prelude::*;
use derive_more::{Deref, DerefMut, From};
use tap::Pipe;

/// Per frame clock, same unit as [`HitPoint::time`]. Never negative, build it with
/// [`SongTime::from_clock`] when the host clock runs below zero during lead-in.
#[derive(Debug, Clone, Copy, PartialEq, Deref, DerefMut, From, Resource)]
pub struct SongTime(pub P32);

impl Default for SongTime {
    fn default() -> Self {
        Self(p32(0.))
    }
}

impl SongTime {
    /// Holds at zero until the song starts.
    pub fn from_clock(millis: f32) -> Self {
        Self(p32(millis.max(0.)))
    }
}

/// The two anchors a curve runs between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: HitPoint,
    pub end: HitPoint,
}

impl Span {
    pub fn new(start: HitPoint, end: HitPoint) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> f32 {
        self.end.time.raw() - self.start.time.raw()
    }

    pub fn distance(&self) -> f32 {
        math::distance(self.start.position, self.end.position)
    }

    /// Normalised progress through the span, clamped to `[0, 1]`.
    /// Zero length spans stay at their start.
    pub fn progress(&self, time: P32) -> T32 {
        match self.duration() {
            duration if duration <= f32::EPSILON => t32(0.),
            duration => ((time.raw() - self.start.time.raw()) / duration)
                .clamp(0., 1.)
                .pipe(t32),
        }
    }
}
