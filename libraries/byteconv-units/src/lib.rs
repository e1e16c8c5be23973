//! Byte quantities expressed in several units at once.
//!
//! A [`FieldGroup`] keeps one text field per unit of a [`UnitScale`] and
//! rewrites all of them whenever one is edited, so every field shows the same
//! number of bytes.

mod group;
mod quantity;
mod scale;

pub use group::FieldGroup;
pub use quantity::{QuantityError, format_grouped, parse_quantity};
pub use scale::{Unit, UnitScale};

pub use rust_decimal::Decimal;
