use super::Direction;
use crate::{hit::*, timing::*, utils::*};

use std::f32::consts::PI;

use bevy::prelude::*;

/// Half a circle over the segment between both objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfCircleMover {
    pub span: Span,
    pub dir: Direction,
    circle: Circle,
    start_angle: f32,
}

impl HalfCircleMover {
    pub fn new(start: HitPoint, end: HitPoint, dir: Direction) -> Self {
        let span = Span::new(start, end);
        let circle = Circle {
            center: start.position.lerp(end.position, 0.5),
            radius: span.distance() / 2.,
        };

        Self {
            span,
            dir,
            circle,
            start_angle: circle.angle_of(start.position),
        }
    }

    pub fn point_at(&self, time: P32) -> Vec2 {
        self.circle
            .point_at(self.start_angle + PI * self.dir.signum() * self.span.progress(time).raw())
    }
}
