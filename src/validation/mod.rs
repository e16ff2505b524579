//! Validation functionality
//!
//! Input checks shared by the schema sources and the renderers.

pub mod input;

pub use input::{ValidationError, ValidationResult};
