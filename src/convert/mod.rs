//! Schema conversion module
//!
//! Turns a raw type map into normalized tables, columns and relationships:
//! - `naming`: field name reconstruction
//! - `classify`: declared type classification
//! - `converter`: the table walk tying both together

pub mod classify;
pub mod converter;
pub mod naming;

pub use classify::classify;
pub use converter::SchemaConverter;
pub use naming::normalize_field_name;
