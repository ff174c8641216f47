//! Multiplicative relations between quantity tags.
//!
//! Each base fact `A × B = C` is expanded once into two ordered-pair maps:
//! - product: `(A, B) → C` and `(B, A) → C`
//! - division: `(C, B) → A` and `(C, A) → B`
//!
//! Lookups are single key matches. Nothing is chained across facts, so
//! `volume ÷ length ÷ length` is two lookups. `Quantity::Invalid` never
//! appears as a key, so any lookup involving it fails.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use super::Quantity;

/// Base fact `lhs × rhs = result`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relation {
    pub lhs: Quantity,
    pub rhs: Quantity,
    pub result: Quantity,
}

const fn rel(lhs: Quantity, rhs: Quantity, result: Quantity) -> Relation {
    Relation { lhs, rhs, result }
}

static RELATIONS: [Relation; 6] = [
    rel(Quantity::Time, Quantity::Length, Quantity::Velocity),
    rel(Quantity::Time, Quantity::Velocity, Quantity::Acceleration),
    rel(Quantity::Mass, Quantity::Acceleration, Quantity::Force),
    rel(Quantity::Force, Quantity::Length, Quantity::Moment),
    rel(Quantity::Length, Quantity::Length, Quantity::Area),
    rel(Quantity::Area, Quantity::Length, Quantity::Volume),
];

type PairLookup = HashMap<(Quantity, Quantity), Quantity>;

static PRODUCT_LOOKUP: LazyLock<PairLookup> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(2 * RELATIONS.len());
    for r in &RELATIONS {
        map.insert((r.lhs, r.rhs), r.result);
        map.insert((r.rhs, r.lhs), r.result);
    }
    map
});

static DIVISION_LOOKUP: LazyLock<PairLookup> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(2 * RELATIONS.len());
    for r in &RELATIONS {
        map.insert((r.result, r.rhs), r.lhs);
        map.insert((r.result, r.lhs), r.rhs);
    }
    map
});

/// The registered base facts, in declaration order.
pub fn relations() -> &'static [Relation] {
    &RELATIONS
}

/// No registered fact matches the requested pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationError {
    NoProduct { lhs: Quantity, rhs: Quantity },
    NoQuotient {
        numerator: Quantity,
        denominator: Quantity,
    },
}

impl fmt::Display for RelationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationError::NoProduct { lhs, rhs } => write!(
                f,
                "no matching physical quantity found for {} × {}",
                lhs.name(),
                rhs.name()
            ),
            RelationError::NoQuotient {
                numerator,
                denominator,
            } => write!(
                f,
                "no matching division relation found for {} ÷ {}",
                numerator.name(),
                denominator.name()
            ),
        }
    }
}

impl std::error::Error for RelationError {}

/// Quantity of `a × b`. Symmetric in its arguments.
pub fn product_quantity(a: Quantity, b: Quantity) -> Result<Quantity, RelationError> {
    PRODUCT_LOOKUP
        .get(&(a, b))
        .copied()
        .ok_or(RelationError::NoProduct { lhs: a, rhs: b })
}

/// Quantity `r` such that `denominator × r = numerator`.
pub fn division_quantity(
    numerator: Quantity,
    denominator: Quantity,
) -> Result<Quantity, RelationError> {
    DIVISION_LOOKUP
        .get(&(numerator, denominator))
        .copied()
        .ok_or(RelationError::NoQuotient {
            numerator,
            denominator,
        })
}
