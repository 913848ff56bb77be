//! Consistency checks on laid-out parts.

mod validate;

pub use validate::{validate_positions, ValidationResult};
