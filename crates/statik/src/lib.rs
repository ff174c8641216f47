//! Dimensional arithmetic and the structural data model for beam frameworks.
//!
//! Layout
//! - `quantity`: physical-quantity tags and the fixed relation table that
//!   derives the tag of a product or quotient.
//! - `value`: scaled-integer numbers `magnitude × 10^exponent` carrying a tag.
//! - `point`: three values (x, y, z) with structural equality.
//! - `model`: static system, nodes, beams, materials and sections. Plain
//!   records, no solving.
//!
//! Error contract
//! - Dimensional errors still compute the number. The error carries the value
//!   (tagged `Quantity::Invalid`) so callers can decide whether it is usable.

pub mod api;
mod cfg;
pub mod model;
pub mod point;
pub mod quantity;
pub mod value;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use point::Point;
pub use quantity::{division_quantity, product_quantity, Quantity, RelationError};
pub use value::{ArithmeticError, Value};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::model::{Beam, Material, Node, Section, StaticSystem};
    pub use crate::point::Point;
    pub use crate::quantity::{
        division_quantity, product_quantity, relations, Quantity, Relation, RelationError,
    };
    pub use crate::value::{ArithmeticError, Value};
}
