use noisy_float::{FloatChecker, NoisyFloat};

/// Rejects negative values. Song time and object time never go below zero.
#[derive(Debug, Clone, Copy)]
pub struct NonNegativeCheck;

impl FloatChecker<f32> for NonNegativeCheck {
    #[inline]
    fn check(value: f32) -> bool {
        0. <= value && value.is_finite()
    }

    #[inline]
    fn assert(value: f32) {
        debug_assert!(Self::check(value), "unexpected negative or infinite value: {value}");
    }
}

/// Rejects anything outside of `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct UnitIntervalCheck;

impl FloatChecker<f32> for UnitIntervalCheck {
    #[inline]
    fn check(value: f32) -> bool {
        (0. ..=1.).contains(&value)
    }

    #[inline]
    fn assert(value: f32) {
        debug_assert!(Self::check(value), "unexpected value outside of [0, 1]: {value}");
    }
}

pub type P32 = NoisyFloat<f32, NonNegativeCheck>;
pub type T32 = NoisyFloat<f32, UnitIntervalCheck>;

#[inline]
pub fn p32(value: f32) -> P32 {
    P32::new(value)
}

#[inline]
pub fn t32(value: f32) -> T32 {
    T32::new(value)
}

pub trait Lerp {
    type Output;
    fn lerp(&self, next: &Self, t: T32) -> Self::Output;
}

impl Lerp for f32 {
    type Output = f32;

    /// Exact at both ends so curves land on their anchors.
    fn lerp(&self, next: &Self, t: T32) -> f32 {
        self * (1. - t.raw()) + next * t.raw()
    }
}
