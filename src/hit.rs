use crate::{error::*, utils::*};

use bevy::{log::debug, prelude::*};
use derive_more::Deref;
use itertools::Itertools;

/// A timed point the cursor has to visit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitPoint {
    pub position: Vec2,
    /// Milliseconds into the song
    pub time: P32,
}

impl HitPoint {
    pub fn new(x: f32, y: f32, time: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            time: p32(time),
        }
    }
}

impl Default for HitPoint {
    fn default() -> Self {
        Self::new(0., 0., 0.)
    }
}

/// The object stream the cursor dances through, ordered by time.
#[derive(Debug, Default, Clone, Deref, Resource)]
pub struct HitObjects(Vec<HitPoint>);

impl HitObjects {
    /// Exact duplicates are dropped, they would only stall the window.
    pub fn new(mut points: Vec<HitPoint>) -> Result<Self> {
        if let Some(index) = points
            .iter()
            .tuple_windows::<(_, _)>()
            .position(|(prev, next)| next.time < prev.time)
        {
            return Err(DanceError::UnorderedObjects { index: index + 1 });
        }

        let len = points.len();
        points.dedup();

        if points.len() != len {
            debug!("dropped {} duplicate hit objects", len - points.len());
        }

        Ok(Self(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_unordered() {
        let points = vec![
            HitPoint::new(0., 0., 0.),
            HitPoint::new(5., 0., 200.),
            HitPoint::new(9., 0., 100.),
        ];

        assert_eq!(
            HitObjects::new(points).unwrap_err(),
            DanceError::UnorderedObjects { index: 2 }
        );
    }

    #[test]
    fn drops_duplicates() {
        let points = vec![
            HitPoint::new(0., 0., 0.),
            HitPoint::new(0., 0., 0.),
            HitPoint::new(5., 0., 100.),
            HitPoint::new(6., 0., 100.),
        ];

        let objects = HitObjects::new(points).unwrap();

        assert_eq!(objects.len(), 3);
        assert_eq!(objects[2], HitPoint::new(6., 0., 100.));
    }
}
