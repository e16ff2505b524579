//! App Schema SDK - Schema extraction and conversion for hosted no-code applications
//!
//! Provides unified interfaces for:
//! - Fetching an application's raw type map (via schema sources)
//! - Converting the raw type map into a relational data model
//! - Rendering the model as DBML, a Mermaid ER diagram, or raw JSON
//! - Validation of application names and URLs
//! - Configuration loading for the command-line tool

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod export;
pub mod extractor;
pub mod models;
pub mod source;
pub mod validation;

// Re-export commonly used types
#[cfg(feature = "native-fs")]
pub use source::FileSchemaSource;
#[cfg(feature = "api-backend")]
pub use source::HttpSchemaSource;
pub use source::{SchemaLookup, SchemaSource, SourceError};

pub use config::{AppSchemaConfig, ConfigError};
pub use convert::{SchemaConverter, classify, normalize_field_name};
pub use export::{
    DbmlExporter, ExportError, ExportFormat, ExportResult, MermaidExporter, RawJsonExporter,
    export_schema,
};
pub use extractor::{ExtractError, SchemaExtractor};
pub use validation::{ValidationError, ValidationResult};

// Re-export models
pub use models::enums::*;
pub use models::{
    Column, DataModel, ForeignKey, RawFieldInfo, RawTypeInfo, RawTypeMap, Relationship, Table,
};
