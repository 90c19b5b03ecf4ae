//! Cursor dancing: smooth, timed cursor paths through a stream of hit objects.

pub mod dancer;
pub mod error;
pub mod hit;
pub mod movers;
pub mod polymover;
pub mod timing;
pub mod utils;

pub use dancer::{
    dance_cursor, CursorPosition, DanceMode, DancePlugin, DanceSettings, Dancer, DirectionPolicy,
};
pub use hit::{HitObjects, HitPoint};
pub use timing::SongTime;
