//! Scaled-integer dimensional values.
//!
//! A `Value` represents `magnitude × 10^exponent` tagged with a `Quantity`.
//! Representations are not normalized: `1e3 l` and `1000e0 l` are the same
//! number but different values, and derived `PartialEq` compares structure.
//!
//! Arithmetic
//! - `add`/`subtract` align both operands to the smaller exponent, then
//!   combine magnitudes. Tags must match.
//! - `multiply`/`divide` combine magnitudes and exponents directly and take the
//!   tag from the relation table.
//! - Dimensional failures still compute the number: `QuantityMismatch` and
//!   `NoRelationFound` carry the result tagged `Quantity::Invalid`.
//! - `divide` truncates toward zero. No remainder is kept.

mod align;
mod parse;

pub use parse::ParseValueError;

use std::fmt;

use crate::quantity::{division_quantity, product_quantity, Quantity, RelationError};
use align::align;

/// Dimensional value `magnitude × 10^exponent` of kind `quantity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Value {
    pub magnitude: i64,
    pub exponent: i32,
    pub quantity: Quantity,
}

/// Failure of a dimensional operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Additive operands have different (or invalid) quantities.
    QuantityMismatch {
        value: Value,
        lhs: Quantity,
        rhs: Quantity,
    },
    /// No relation is registered for the product or quotient.
    NoRelationFound { value: Value, source: RelationError },
    DivideByZero,
    /// Magnitude or exponent left the representable range.
    Overflow,
}

impl ArithmeticError {
    /// The number computed despite the error, tagged `Quantity::Invalid`.
    pub fn value(&self) -> Option<Value> {
        match self {
            ArithmeticError::QuantityMismatch { value, .. }
            | ArithmeticError::NoRelationFound { value, .. } => Some(*value),
            ArithmeticError::DivideByZero | ArithmeticError::Overflow => None,
        }
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::QuantityMismatch { lhs, rhs, .. } => write!(
                f,
                "additive operands must have the same physical quantity ({} vs {})",
                lhs.name(),
                rhs.name()
            ),
            ArithmeticError::NoRelationFound { source, .. } => write!(f, "{source}"),
            ArithmeticError::DivideByZero => write!(f, "division by a zero magnitude"),
            ArithmeticError::Overflow => write!(f, "magnitude or exponent overflow"),
        }
    }
}

impl std::error::Error for ArithmeticError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArithmeticError::NoRelationFound { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Value {
    #[inline]
    pub const fn new(magnitude: i64, exponent: i32, quantity: Quantity) -> Self {
        Self {
            magnitude,
            exponent,
            quantity,
        }
    }

    /// `self + rhs` at the smaller of both exponents.
    pub fn add(self, rhs: Value) -> Result<Value, ArithmeticError> {
        let (a, b, exponent) = align(&self, &rhs).ok_or(ArithmeticError::Overflow)?;
        let magnitude = a.checked_add(b).ok_or(ArithmeticError::Overflow)?;
        self.same_quantity(rhs, magnitude, exponent)
    }

    /// `self − rhs` at the smaller of both exponents.
    pub fn subtract(self, rhs: Value) -> Result<Value, ArithmeticError> {
        let (a, b, exponent) = align(&self, &rhs).ok_or(ArithmeticError::Overflow)?;
        let magnitude = a.checked_sub(b).ok_or(ArithmeticError::Overflow)?;
        self.same_quantity(rhs, magnitude, exponent)
    }

    pub fn multiply(self, rhs: Value) -> Result<Value, ArithmeticError> {
        let magnitude = self
            .magnitude
            .checked_mul(rhs.magnitude)
            .ok_or(ArithmeticError::Overflow)?;
        let exponent = self
            .exponent
            .checked_add(rhs.exponent)
            .ok_or(ArithmeticError::Overflow)?;
        tag_with(
            magnitude,
            exponent,
            product_quantity(self.quantity, rhs.quantity),
        )
    }

    /// Truncating quotient. A zero divisor is rejected before the tag lookup.
    pub fn divide(self, rhs: Value) -> Result<Value, ArithmeticError> {
        if rhs.magnitude == 0 {
            return Err(ArithmeticError::DivideByZero);
        }
        let magnitude = self
            .magnitude
            .checked_div(rhs.magnitude)
            .ok_or(ArithmeticError::Overflow)?;
        let exponent = self
            .exponent
            .checked_sub(rhs.exponent)
            .ok_or(ArithmeticError::Overflow)?;
        tag_with(
            magnitude,
            exponent,
            division_quantity(self.quantity, rhs.quantity),
        )
    }

    fn same_quantity(
        self,
        rhs: Value,
        magnitude: i64,
        exponent: i32,
    ) -> Result<Value, ArithmeticError> {
        if self.quantity == rhs.quantity && self.quantity.is_valid() {
            Ok(Value::new(magnitude, exponent, self.quantity))
        } else {
            Err(ArithmeticError::QuantityMismatch {
                value: Value::new(magnitude, exponent, Quantity::Invalid),
                lhs: self.quantity,
                rhs: rhs.quantity,
            })
        }
    }
}

fn tag_with(
    magnitude: i64,
    exponent: i32,
    quantity: Result<Quantity, RelationError>,
) -> Result<Value, ArithmeticError> {
    match quantity {
        Ok(q) => Ok(Value::new(magnitude, exponent, q)),
        Err(source) => Err(ArithmeticError::NoRelationFound {
            value: Value::new(magnitude, exponent, Quantity::Invalid),
            source,
        }),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{} {}", self.magnitude, self.exponent, self.quantity)
    }
}

#[cfg(test)]
mod tests;
