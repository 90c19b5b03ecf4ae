use super::Window;
use crate::{hit::*, timing::*, utils::*};

use bevy::prelude::*;
use itertools::Itertools;

/// Straight segments through every object of the window, each taking the time
/// between its two objects.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMover {
    items: Window,
}

impl LineMover {
    pub fn new(items: Window) -> Self {
        debug_assert!(2 <= items.len(), "a line needs two objects");
        Self { items }
    }

    pub fn between(start: HitPoint, end: HitPoint) -> Self {
        Self::new(Window::between(start, end))
    }

    pub fn window(&self) -> &Window {
        &self.items
    }

    pub fn span(&self) -> Span {
        self.items.span()
    }

    #[rustfmt::skip]
    pub fn point_at(&self, time: P32) -> Vec2 {
        self.items
            .iter()
            .tuple_windows::<(_, _)>()
            .find(|(_, next)| time <= next.time)
            .map_or(self.items.last().position, |(prev, next)| math::lerp(
                prev.position,
                next.position,
                Span::new(*prev, *next).progress(time)
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0.; "start")]
    #[test_case(0.25; "quarter")]
    #[test_case(0.5; "half")]
    #[test_case(0.75; "three quarters")]
    #[test_case(1.; "end")]
    fn affine_between_ends(t: f32) {
        let (start, end) = (HitPoint::new(0., 0., 100.), HitPoint::new(40., -20., 300.));
        let mover = LineMover::between(start, end);

        assert_eq!(
            mover.point_at(p32(100. + 200. * t)),
            (1. - t) * start.position + t * end.position
        );
    }

    #[test]
    fn exact_at_ends() {
        let (start, end) = (HitPoint::new(0.1, 0.7, 13.), HitPoint::new(9.3, -2.9, 29.));
        let mover = LineMover::between(start, end);

        assert_eq!(mover.point_at(start.time), start.position);
        assert_eq!(mover.point_at(end.time), end.position);
    }

    #[test]
    fn through_every_object() {
        let items = [
            HitPoint::new(0., 0., 0.),
            HitPoint::new(10., 0., 100.),
            HitPoint::new(10., 10., 300.),
        ];
        let mover = LineMover::new(Window::between(items[0], items[1]).advance(items[2], 3));

        assert_eq!(mover.point_at(p32(50.)), Vec2::new(5., 0.));
        assert_eq!(mover.point_at(p32(100.)), Vec2::new(10., 0.));
        assert_eq!(mover.point_at(p32(200.)), Vec2::new(10., 5.));
        assert_eq!(mover.point_at(p32(500.)), Vec2::new(10., 10.));
    }

    #[test]
    fn zero_duration_returns_start() {
        let (start, end) = (HitPoint::new(1., 2., 50.), HitPoint::new(8., 9., 50.));
        let mover = LineMover::between(start, end);

        assert_eq!(mover.point_at(p32(50.)), start.position);
    }
}
