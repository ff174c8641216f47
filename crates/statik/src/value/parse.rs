//! Text form `MAG[eEXP] SYM`, e.g. `300e2 F`, `-5 l`, `12E-3A`.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::Value;
use crate::quantity::{ParseQuantityError, Quantity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseValueError {
    Empty,
    Magnitude(ParseIntError),
    Exponent(ParseIntError),
    Quantity(ParseQuantityError),
}

impl fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseValueError::Empty => write!(f, "empty value"),
            ParseValueError::Magnitude(e) => write!(f, "invalid magnitude: {e}"),
            ParseValueError::Exponent(e) => write!(f, "invalid exponent: {e}"),
            ParseValueError::Quantity(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseValueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseValueError::Empty => None,
            ParseValueError::Magnitude(e) | ParseValueError::Exponent(e) => Some(e),
            ParseValueError::Quantity(e) => Some(e),
        }
    }
}

impl FromStr for Value {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let symbol = s.chars().next_back().ok_or(ParseValueError::Empty)?;
        let number = s[..s.len() - symbol.len_utf8()].trim_end();
        let quantity: Quantity = symbol
            .to_string()
            .parse()
            .map_err(ParseValueError::Quantity)?;
        let (mag, exp) = match number.split_once(['e', 'E']) {
            Some((mag, exp)) => (mag, Some(exp)),
            None => (number, None),
        };
        let magnitude = mag.parse().map_err(ParseValueError::Magnitude)?;
        let exponent = match exp {
            Some(exp) => exp.parse().map_err(ParseValueError::Exponent)?,
            None => 0,
        };
        Ok(Value::new(magnitude, exponent, quantity))
    }
}
