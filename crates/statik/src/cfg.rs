//! Numeric limits for scaled-integer arithmetic (internal).
//!
//! Policy
//! - Magnitudes are `i64`, exponents `i32`. Limits are fixed constants; there
//!   is no runtime configuration.

/// Largest `n` with `10^n` representable in `i64`.
pub(crate) const MAX_DECIMAL_SHIFT: u32 = 18;
