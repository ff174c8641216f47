//! Curated surface for callers that only need the arithmetic.
//!
//! Free-function spellings of the `Value` methods, plus the lookup functions
//! and text-form parsers.

pub use crate::point::Point;
pub use crate::quantity::{
    division_quantity, product_quantity, relations, ParseQuantityError, Quantity, Relation,
    RelationError,
};
pub use crate::value::{ArithmeticError, ParseValueError, Value};

/// `a + b`; see `Value::add`.
#[inline]
pub fn add(a: Value, b: Value) -> Result<Value, ArithmeticError> {
    a.add(b)
}

/// `a − b`; see `Value::subtract`.
#[inline]
pub fn subtract(a: Value, b: Value) -> Result<Value, ArithmeticError> {
    a.subtract(b)
}

#[inline]
pub fn multiply(a: Value, b: Value) -> Result<Value, ArithmeticError> {
    a.multiply(b)
}

#[inline]
pub fn divide(a: Value, b: Value) -> Result<Value, ArithmeticError> {
    a.divide(b)
}
