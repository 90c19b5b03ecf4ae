use std::ops::Index;

use tinyvec::{Array, ArrayVec};

/// Index counted backwards, `FromEnd(0)` is the last element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FromEnd(pub usize);

impl<T> Index<FromEnd> for [T] {
    type Output = T;

    fn index(&self, FromEnd(n): FromEnd) -> &T {
        &self[self
            .len()
            .checked_sub(1 + n)
            .unwrap_or_else(|| panic!("From End out of range. Item len: {}", self.len()))]
    }
}

impl<A: Array> Index<FromEnd> for ArrayVec<A> {
    type Output = A::Item;

    fn index(&self, from_end: FromEnd) -> &A::Item {
        &self.as_slice()[from_end]
    }
}
