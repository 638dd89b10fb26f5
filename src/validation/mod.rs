//! Declarative form validation
//!
//! A [`Schema`] is an ordered list of fields, each carrying an ordered list of
//! rules. Validating a [`FieldValues`] snapshot evaluates every rule and yields
//! either a typed [`ValidRecord`] or the [`FieldErrors`] to show the user.

mod rules;
mod schema;
mod values;

pub use schema::{Field, Schema, ValidRecord, ValidationResult};
pub use values::{FieldErrors, FieldValues};
