//! Exponent alignment for additive operations.

use super::Value;
use crate::cfg::MAX_DECIMAL_SHIFT;

/// `10^shift`, or `None` past `i64` range.
#[inline]
pub(crate) fn pow10(shift: u32) -> Option<i64> {
    if shift > MAX_DECIMAL_SHIFT {
        return None;
    }
    10i64.checked_pow(shift)
}

/// Rescale `v` so that its exponent becomes `target` (`target <= v.exponent`).
fn rescale(v: &Value, target: i32) -> Option<i64> {
    if v.magnitude == 0 {
        return Some(0);
    }
    v.magnitude.checked_mul(pow10(v.exponent.abs_diff(target))?)
}

/// Both magnitudes at the smaller of the two exponents, plus that exponent.
pub(crate) fn align(a: &Value, b: &Value) -> Option<(i64, i64, i32)> {
    let exponent = a.exponent.min(b.exponent);
    Some((rescale(a, exponent)?, rescale(b, exponent)?, exponent))
}
