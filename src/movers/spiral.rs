use super::Direction;
use crate::{hit::*, timing::*, utils::*};

use std::f32::consts::{PI, TAU};

use bevy::{log::trace, prelude::*};
use tap::Pipe;

/// How many times the cursor circles its anchor. Even counts cancel the
/// spiral out visually so this should stay odd.
const CIRCLE_NAVIGATIONS: f32 = 1.;

/// Spirals shorter than this get stretched so they stay visible.
const MIN_RADIUS: f32 = 20.;

fn floored_radius(distance: f32) -> f32 {
    if MIN_RADIUS <= distance {
        return distance;
    }

    let radius = MIN_RADIUS + distance / 20.;
    trace!("spiral radius floored from {distance} to {radius}");
    radius
}

/// Winds onto the end object, converging on it as the radius shrinks to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralToMover {
    pub span: Span,
    pub dir: Direction,
    start_angle: f32,
    start_radius: f32,
}

impl SpiralToMover {
    pub fn new(start: HitPoint, end: HitPoint, dir: Direction) -> Self {
        let span = Span::new(start, end);

        Self {
            span,
            dir,
            start_angle: math::angle(start.position, end.position) + PI,
            start_radius: floored_radius(span.distance()),
        }
    }

    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    pub fn start_radius(&self) -> f32 {
        self.start_radius
    }

    pub fn point_at(&self, time: P32) -> Vec2 {
        let remaining = 1. - self.span.progress(time).raw();
        let radius = self.start_radius * remaining;

        (CIRCLE_NAVIGATIONS * (self.start_angle + TAU * remaining * self.dir.signum()))
            .pipe(|angle| self.span.end.position + Vec2::new(angle.cos(), angle.sin()) * radius)
    }
}

/// Unwinds away from the start object until it reaches the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralFromMover {
    pub span: Span,
    pub dir: Direction,
    end_angle: f32,
    end_radius: f32,
}

impl SpiralFromMover {
    pub fn new(start: HitPoint, end: HitPoint, dir: Direction) -> Self {
        let span = Span::new(start, end);

        Self {
            span,
            dir,
            end_angle: math::angle(start.position, end.position),
            end_radius: floored_radius(span.distance()),
        }
    }

    pub fn point_at(&self, time: P32) -> Vec2 {
        let t = self.span.progress(time).raw();
        let radius = self.end_radius * t;

        (CIRCLE_NAVIGATIONS * (self.end_angle + TAU * t * self.dir.signum()))
            .pipe(|angle| self.span.start.position + Vec2::new(angle.cos(), angle.sin()) * radius)
    }
}
