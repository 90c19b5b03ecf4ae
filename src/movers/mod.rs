//! Curves between a pair of hit objects.

mod bezier;
mod circle;
mod spiral;

pub use bezier::QuadraticBezierMover;
pub use circle::HalfCircleMover;
pub use spiral::{SpiralFromMover, SpiralToMover};

use crate::{hit::*, polymover::LineMover, timing::*, utils::*};

use std::fmt;

use bevy::prelude::*;

/// Handedness of any circular part of a curve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl Direction {
    pub fn signum(self) -> f32 {
        match self {
            Self::CounterClockwise => 1.,
            Self::Clockwise => -1.,
        }
    }

    pub fn from_orientation(orientation: Orientation) -> Option<Self> {
        match orientation {
            Orientation::CounterClockWise => Some(Self::CounterClockwise),
            Orientation::ClockWise => Some(Self::Clockwise),
            Orientation::CoLinear => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MoverKind {
    #[default]
    Linear,
    HalfCircle,
    SpiralTo,
    SpiralFrom,
    QuadraticBezier,
}

impl fmt::Display for MoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl MoverKind {
    /// Menu order
    pub const ALL: [MoverKind; 5] = [
        Self::Linear,
        Self::HalfCircle,
        Self::SpiralTo,
        Self::SpiralFrom,
        Self::QuadraticBezier,
    ];

    /// Label shown in selection menus.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "Line",
            Self::HalfCircle => "Half circles",
            Self::SpiralTo => "Spiral2",
            Self::SpiralFrom => "Spiral",
            Self::QuadraticBezier => "Quadratic bezier",
        }
    }

    pub fn build(self, start: HitPoint, end: HitPoint, dir: Direction) -> Mover {
        match self {
            Self::Linear => Mover::Linear(LineMover::between(start, end)),
            Self::HalfCircle => Mover::HalfCircle(HalfCircleMover::new(start, end, dir)),
            Self::SpiralTo => Mover::SpiralTo(SpiralToMover::new(start, end, dir)),
            Self::SpiralFrom => Mover::SpiralFrom(SpiralFromMover::new(start, end, dir)),
            Self::QuadraticBezier => {
                Mover::QuadraticBezier(QuadraticBezierMover::new(start, end, dir))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Mover {
    Linear(LineMover),
    HalfCircle(HalfCircleMover),
    SpiralTo(SpiralToMover),
    SpiralFrom(SpiralFromMover),
    QuadraticBezier(QuadraticBezierMover),
}

impl Mover {
    pub fn kind(&self) -> MoverKind {
        match self {
            Self::Linear(_) => MoverKind::Linear,
            Self::HalfCircle(_) => MoverKind::HalfCircle,
            Self::SpiralTo(_) => MoverKind::SpiralTo,
            Self::SpiralFrom(_) => MoverKind::SpiralFrom,
            Self::QuadraticBezier(_) => MoverKind::QuadraticBezier,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Linear(mover) => mover.span(),
            Self::HalfCircle(mover) => mover.span,
            Self::SpiralTo(mover) => mover.span,
            Self::SpiralFrom(mover) => mover.span,
            Self::QuadraticBezier(mover) => mover.span,
        }
    }

    /// Only meaningful within [`Mover::span`], progress is clamped outside of it.
    pub fn point_at(&self, time: P32) -> Vec2 {
        match self {
            Self::Linear(mover) => mover.point_at(time),
            Self::HalfCircle(mover) => mover.point_at(time),
            Self::SpiralTo(mover) => mover.point_at(time),
            Self::SpiralFrom(mover) => mover.point_at(time),
            Self::QuadraticBezier(mover) => mover.point_at(time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(MoverKind::Linear, "Line")]
    #[test_case(MoverKind::HalfCircle, "Half circles")]
    #[test_case(MoverKind::SpiralTo, "Spiral2")]
    #[test_case(MoverKind::SpiralFrom, "Spiral")]
    #[test_case(MoverKind::QuadraticBezier, "Quadratic bezier")]
    fn built_kind_and_name(kind: MoverKind, name: &str) {
        let (start, end) = (HitPoint::new(0., 0., 0.), HitPoint::new(100., 0., 500.));
        let mover = kind.build(start, end, Direction::Clockwise);

        assert_eq!(mover.kind(), kind);
        assert_eq!(mover.name(), name);
        assert_eq!(kind.to_string(), name);
        assert_eq!(mover.span(), Span::new(start, end));
    }

    #[test]
    fn every_kind_lands_on_end() {
        let (start, end) = (HitPoint::new(20., 30., 1000.), HitPoint::new(220., 130., 1400.));

        MoverKind::ALL.into_iter().for_each(|kind| {
            [Direction::Clockwise, Direction::CounterClockwise]
                .into_iter()
                .for_each(|dir| {
                    let position = kind.build(start, end, dir).point_at(end.time);
                    assert!(
                        position.distance(end.position) < 1e-2,
                        "{kind} {dir:?} ended at {position}"
                    );
                })
        })
    }

    #[test]
    fn direction_signs() {
        assert_eq!(Direction::CounterClockwise.signum(), 1.);
        assert_eq!(Direction::Clockwise.signum(), -1.);
        assert_eq!(Direction::from_orientation(Orientation::CoLinear), None);
    }
}
