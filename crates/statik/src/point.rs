//! Positions in the framework.
//!
//! Equality is structural: every axis must match in magnitude, exponent and
//! quantity. `Point` does not normalize, so `(1e3, 0, 0)` and `(1000e0, 0, 0)`
//! are different points even though they name the same location.

use crate::value::Value;

/// Position `(x, y, z)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Value,
    pub y: Value,
    pub z: Value,
}

impl Point {
    #[inline]
    pub const fn new(x: Value, y: Value, z: Value) -> Self {
        Self { x, y, z }
    }

    /// Structural equality on all three axes. Not numeric equality.
    #[inline]
    pub fn equals(&self, other: &Point) -> bool {
        self == other
    }
}
