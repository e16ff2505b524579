//! Models module for the SDK
//!
//! Defines the raw type map delivered by a schema source and the normalized
//! structures the converter produces from it.

pub mod column;
pub mod data_model;
pub mod enums;
pub mod raw;
pub mod relationship;
pub mod table;

pub use column::{CREATED_DATE_COLUMN, Column, ForeignKey, ID_COLUMN, MODIFIED_DATE_COLUMN};
pub use data_model::DataModel;
pub use enums::*;
pub use raw::{RawFieldInfo, RawTypeInfo, RawTypeMap};
pub use relationship::Relationship;
pub use table::Table;
