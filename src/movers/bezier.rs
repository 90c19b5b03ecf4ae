use super::Direction;
use crate::{hit::*, timing::*, utils::*};

use bevy::prelude::*;
use lyon::geom::QuadraticBezierSegment;

/// Bows out to the side given by `dir`, half as far as the objects are apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezierMover {
    pub span: Span,
    pub dir: Direction,
    curve: QuadraticBezierSegment<f32>,
}

impl QuadraticBezierMover {
    pub fn new(start: HitPoint, end: HitPoint, dir: Direction) -> Self {
        let (from, to) = (start.position, end.position);
        let ctrl = from.lerp(to, 0.5) + (to - from).perp() * 0.5 * dir.signum();

        Self {
            span: Span::new(start, end),
            dir,
            curve: QuadraticBezierSegment {
                from: from.to_array().into(),
                ctrl: ctrl.to_array().into(),
                to: to.to_array().into(),
            },
        }
    }

    pub fn point_at(&self, time: P32) -> Vec2 {
        let point = self.curve.sample(self.span.progress(time).raw());
        Vec2::new(point.x, point.y)
    }
}
