use super::Window;
use crate::{hit::*, movers::Direction, timing::*, utils::*};

use std::f32::consts::TAU;

use bevy::prelude::*;
use tap::Pipe;

/// Circular arc from the first to the last of three objects, passing the middle one
/// at its time.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcMover {
    items: Window,
    circle: Circle,
    start_angle: f32,
    /// Signed sweep up to the middle object
    middle_sweep: f32,
    /// Signed, never more than a full turn
    sweep: f32,
    dir: Direction,
}

impl ArcMover {
    /// `None` when no finite circle fits through the three objects.
    pub fn new(start: HitPoint, middle: HitPoint, end: HitPoint) -> Option<Self> {
        let positions = [start.position, middle.position, end.position];
        let circle = math::circle_through(positions[0], positions[1], positions[2])?;
        // The middle object is only passed when sweeping with the triple's orientation
        let dir = positions.into_iter().orientation().pipe(Direction::from_orientation)?;

        let start_angle = circle.angle_of(start.position);
        let sweep_to = |point: HitPoint| {
            let angle = circle.angle_of(point.position);
            match dir {
                Direction::CounterClockwise => (angle - start_angle).rem_euclid(TAU),
                Direction::Clockwise => -(start_angle - angle).rem_euclid(TAU),
            }
        };

        Some(Self {
            items: Window::between(start, middle).advance(end, 3),
            circle,
            start_angle,
            middle_sweep: sweep_to(middle),
            sweep: sweep_to(end),
            dir,
        })
    }

    pub fn window(&self) -> &Window {
        &self.items
    }

    pub fn circle(&self) -> Circle {
        self.circle
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    /// Angular speed changes at the middle object so each object is passed at its time.
    pub fn point_at(&self, time: P32) -> Vec2 {
        let (start, middle, end) = (self.items[0], self.items[1], self.items[2]);
        let middle_angle = self.start_angle + self.middle_sweep;

        let theta = if time < middle.time {
            Span::new(start, middle)
                .progress(time)
                .pipe(|t| self.start_angle.lerp(&middle_angle, t))
        } else {
            Span::new(middle, end)
                .progress(time)
                .pipe(|t| middle_angle.lerp(&(self.start_angle + self.sweep), t))
        };

        self.circle.point_at(theta)
    }
}
