use thiserror::Error;

pub type Result<T> = std::result::Result<T, DanceError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DanceError {
    /// A window was requested past the end of the object stream.
    #[error("window of {len} objects from index {start} exceeds the {available} available")]
    WindowOutOfBounds {
        start: usize,
        len: usize,
        available: usize,
    },

    #[error("object {index} is timed before its predecessor")]
    UnorderedObjects { index: usize },
}
