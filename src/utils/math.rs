use super::float::{Lerp, T32};

use bevy::math::Vec2;
use itertools::Itertools;

/// Upper bound on `|det| / longest_side²` for three points to count as collinear.
/// Roughly the sine of the flattest angle the triangle may have before a circle
/// through it is rejected.
pub const COLLINEAR_TOLERANCE: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockWise,
    ClockWise,
    CoLinear,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn angle_of(&self, point: Vec2) -> f32 {
        angle(self.center, point)
    }

    pub fn point_at(&self, theta: f32) -> Vec2 {
        self.center + Vec2::new(theta.cos(), theta.sin()) * self.radius
    }
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Angle of the ray from `from` towards `to`.
#[inline]
pub fn angle(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Exact at `t = 0` and `t = 1`, unlike `Vec2::lerp`.
#[inline]
pub fn lerp(from: Vec2, to: Vec2, t: T32) -> Vec2 {
    Vec2::new(from.x.lerp(&to.x, t), from.y.lerp(&to.y, t))
}

fn degenerate(det: f32, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let longest = [a.distance_squared(b), b.distance_squared(c), c.distance_squared(a)]
        .into_iter()
        .fold(0., f32::max);

    det.abs() <= COLLINEAR_TOLERANCE * longest
}

pub fn orientation(a: Vec2, b: Vec2, c: Vec2) -> Orientation {
    match (b - a).perp_dot(c - a) {
        det if degenerate(det, a, b, c) => Orientation::CoLinear,
        det if 0. < det => Orientation::CounterClockWise,
        _ => Orientation::ClockWise,
    }
}

pub trait Orient: Iterator<Item = Vec2> + Sized {
    fn orientation(self) -> Orientation {
        self.collect_tuple::<(_, _, _)>()
            .map_or(Orientation::CoLinear, |(a, b, c)| orientation(a, b, c))
    }
}

impl<I: Iterator<Item = Vec2>> Orient for I {}

/// Circle through three points, `None` when they are (nearly) collinear or coincide.
///
/// Works relative to `a` so large playfield coordinates don't eat the precision
/// of the determinant.
pub fn circle_through(a: Vec2, b: Vec2, c: Vec2) -> Option<Circle> {
    let (ab, ac) = (b - a, c - a);
    let det = ab.perp_dot(ac);

    if degenerate(det, a, b, c) {
        return None;
    }

    let (ab2, ac2) = (ab.length_squared(), ac.length_squared());
    let offset = Vec2::new(ac.y * ab2 - ab.y * ac2, ab.x * ac2 - ac.x * ab2) / (2. * det);

    Some(Circle {
        center: a + offset,
        radius: offset.length(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::float::t32;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn square_corner_circle() {
        let circle = circle_through(Vec2::new(0., 0.), Vec2::new(10., 0.), Vec2::new(10., 10.)).unwrap();

        assert_eq!(circle.center, Vec2::new(5., 5.));
        assert!((circle.radius - 50f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn far_from_origin() {
        let offset = Vec2::new(4000., 3000.);
        let circle = circle_through(
            offset + Vec2::new(-1., 0.),
            offset + Vec2::new(0., 1.),
            offset + Vec2::new(1., 0.),
        )
        .unwrap();

        assert!(circle.center.distance(offset) < 1e-3);
        assert!((circle.radius - 1.).abs() < 1e-3);
    }

    #[test_case((0., 0.), (50., 0.), (100., 0.); "collinear")]
    #[test_case((0., 0.), (50., 0.01), (100., 0.); "nearly collinear")]
    #[test_case((0., 0.), (0., 0.), (5., 5.); "coincident pair")]
    #[test_case((3., 3.), (3., 3.), (3., 3.); "single point")]
    #[test_case((0., 0.), (100., 100.), (50., 50.); "middle out of order")]
    fn no_circle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) {
        let [a, b, c] = [a, b, c].map(|(x, y)| Vec2::new(x, y));
        assert_eq!(circle_through(a, b, c), None);
        assert_eq!(orientation(a, b, c), Orientation::CoLinear);
    }

    #[test]
    fn orientations() {
        let (a, b, c) = (Vec2::new(0., 0.), Vec2::new(10., 0.), Vec2::new(10., 10.));

        assert_eq!([a, b, c].into_iter().orientation(), Orientation::CounterClockWise);
        assert_eq!([c, b, a].into_iter().orientation(), Orientation::ClockWise);
        assert_eq!([a, b].into_iter().orientation(), Orientation::CoLinear);
    }

    #[test]
    fn kernel_basics() {
        assert_eq!(distance(Vec2::new(0., 0.), Vec2::new(3., 4.)), 5.);
        assert_eq!(angle(Vec2::new(1., 1.), Vec2::new(1., 2.)), std::f32::consts::FRAC_PI_2);
        assert_eq!(lerp(Vec2::new(0.1, 0.7), Vec2::new(9.3, -2.9), t32(1.)), Vec2::new(9.3, -2.9));
    }
}
