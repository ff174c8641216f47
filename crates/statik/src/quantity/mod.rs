//! Physical-quantity tags.
//!
//! - `Quantity`: closed set of dimensions plus the `Invalid` sentinel.
//! - Symbols follow the single-character convention (`l` length, `F` force, ...).
//!   The sentinel renders as `#` and is never parsed back.
//!
//! The multiplicative algebra over these tags lives in `relations`.

mod relations;

pub use relations::{division_quantity, product_quantity, relations, Relation, RelationError};

use std::fmt;
use std::str::FromStr;

/// Symbol of the `Invalid` sentinel.
pub const INVALID_SYMBOL: char = '#';

/// Physical dimension attached to a `Value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quantity {
    Time,
    Length,
    Velocity,
    Acceleration,
    Mass,
    Force,
    Moment,
    Area,
    Volume,
    Energy,
    /// Output of a failed combination. Never a key in the relation table.
    Invalid,
}

impl Quantity {
    /// Every valid tag, in symbol-table order.
    pub const ALL: [Quantity; 10] = [
        Quantity::Time,
        Quantity::Length,
        Quantity::Velocity,
        Quantity::Acceleration,
        Quantity::Mass,
        Quantity::Force,
        Quantity::Moment,
        Quantity::Area,
        Quantity::Volume,
        Quantity::Energy,
    ];

    pub fn symbol(self) -> char {
        match self {
            Quantity::Time => 't',
            Quantity::Length => 'l',
            Quantity::Velocity => 'v',
            Quantity::Acceleration => 'a',
            Quantity::Mass => 'm',
            Quantity::Force => 'F',
            Quantity::Moment => 'M',
            Quantity::Area => 'A',
            Quantity::Volume => 'V',
            Quantity::Energy => 'J',
            Quantity::Invalid => INVALID_SYMBOL,
        }
    }

    /// Inverse of `symbol` for valid tags; `#` yields `None`.
    pub fn from_symbol(c: char) -> Option<Quantity> {
        Quantity::ALL.into_iter().find(|q| q.symbol() == c)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Quantity::Invalid
    }

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Time => "time",
            Quantity::Length => "length",
            Quantity::Velocity => "velocity",
            Quantity::Acceleration => "acceleration",
            Quantity::Mass => "mass",
            Quantity::Force => "force",
            Quantity::Moment => "moment",
            Quantity::Area => "area",
            Quantity::Volume => "volume",
            Quantity::Energy => "energy",
            Quantity::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Input was not a single known quantity symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseQuantityError {
    pub input: String,
}

impl fmt::Display for ParseQuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown quantity symbol {:?}", self.input)
    }
}

impl std::error::Error for ParseQuantityError {}

impl FromStr for Quantity {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Quantity::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| ParseQuantityError {
            input: s.to_string(),
        })
    }
}
