//! Export functionality
//!
//! Provides renderers for the three output formats:
//! - DBML (relational schema)
//! - Mermaid `erDiagram` (entity-relationship diagram)
//! - Raw JSON (the unconverted type map)

pub mod dbml;
pub mod mermaid;
pub mod raw_json;

use crate::convert::SchemaConverter;
use crate::models::RawTypeMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Result of an export operation.
///
/// Contains the exported content and format identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use = "export results contain the exported content and should be used"]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier (`dbml`, `mermaid` or `json`)
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Export error: {0}")]
    ExportError(String),
}

/// Output format selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Relational schema (DBML)
    #[default]
    Dbml,
    /// Entity-relationship diagram (Mermaid)
    Mermaid,
    /// Raw type map as JSON
    Json,
}

impl ExportFormat {
    /// Resolve a caller-supplied format token.
    ///
    /// Unrecognized tokens fall back to [`ExportFormat::Dbml`]; this is not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use app_schema_sdk::export::ExportFormat;
    ///
    /// assert_eq!(ExportFormat::from_token("mermaid"), ExportFormat::Mermaid);
    /// assert_eq!(ExportFormat::from_token("RAW"), ExportFormat::Json);
    /// assert_eq!(ExportFormat::from_token("xml"), ExportFormat::Dbml);
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "dbml" | "sql" | "schema" => ExportFormat::Dbml,
            "mermaid" | "diagram" | "erd" => ExportFormat::Mermaid,
            "json" | "raw" => ExportFormat::Json,
            other => {
                debug!("Unknown format token '{}', using dbml", other);
                ExportFormat::default()
            }
        }
    }

    /// Format identifier stored in [`ExportResult::format`]
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Dbml => "dbml",
            ExportFormat::Mermaid => "mermaid",
            ExportFormat::Json => "json",
        }
    }

    /// Content-kind tag describing the payload
    pub fn content_kind(&self) -> &'static str {
        match self {
            ExportFormat::Dbml => "relational-schema-text",
            ExportFormat::Mermaid => "diagram-text",
            ExportFormat::Json => "structured-json",
        }
    }

    /// Conventional file extension for the payload
    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::Dbml => "dbml",
            ExportFormat::Mermaid => "mmd",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a raw type map in the requested format.
///
/// DBML and Mermaid go through [`SchemaConverter`]; JSON serializes the raw
/// map directly.
///
/// # Example
///
/// ```rust
/// use app_schema_sdk::export::{ExportFormat, export_schema};
/// use app_schema_sdk::models::RawTypeMap;
///
/// let raw = RawTypeMap::from_json(r#"{"Task": {"fields": {"title": {"type": "text"}}}}"#).unwrap();
/// let result = export_schema(&raw, ExportFormat::Dbml).unwrap();
/// assert_eq!(result.format, "dbml");
/// assert!(result.content.contains("  title text"));
/// ```
pub fn export_schema(raw: &RawTypeMap, format: ExportFormat) -> Result<ExportResult, ExportError> {
    let content = match format {
        ExportFormat::Dbml => DbmlExporter::export_model(&SchemaConverter::new().convert(raw)),
        ExportFormat::Mermaid => {
            MermaidExporter::export_model(&SchemaConverter::new().convert(raw))
        }
        ExportFormat::Json => RawJsonExporter::export(raw)?,
    };

    Ok(ExportResult {
        content,
        format: format.as_str().to_string(),
    })
}

// Re-export for convenience
pub use dbml::DbmlExporter;
pub use mermaid::MermaidExporter;
pub use raw_json::RawJsonExporter;
