pub mod float;
pub mod from_end;
pub mod math;

pub use float::{p32, t32, Lerp, P32, T32};
pub use from_end::FromEnd;
pub use math::{Circle, Orient, Orientation};
