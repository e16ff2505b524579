//! Schema extraction: source lookup followed by rendering.

use crate::export::{ExportError, ExportFormat, ExportResult, export_schema};
use crate::source::{SchemaLookup, SchemaSource, SourceError};
use crate::validation::ValidationError;
use tracing::info;

/// Errors surfaced to callers of [`SchemaExtractor`]
///
/// `NotFound` and `Transient` stay distinct: an absent schema is never
/// reported as an empty one, and a failed fetch is never reported as absent.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("No schema found for {0}")]
    NotFound(String),
    #[error("Transient failure: {0}")]
    Transient(String),
    #[error("Invalid address: {0}")]
    InvalidAddress(ValidationError),
    #[error("Request rejected with status {0}")]
    Rejected(u16),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl From<SourceError> for ExtractError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::InvalidAddress(e) => ExtractError::InvalidAddress(e),
            SourceError::Transient(msg) => ExtractError::Transient(msg),
            SourceError::Rejected(status) => ExtractError::Rejected(status),
            SourceError::Parse(msg) => ExtractError::Parse(msg),
        }
    }
}

/// Extracts and renders the schema of a target through a [`SchemaSource`]
pub struct SchemaExtractor<S: SchemaSource> {
    source: S,
}

impl<S: SchemaSource> SchemaExtractor<S> {
    /// Create a new extractor over the given source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the raw type map for `address` and render it as `format`.
    ///
    /// The converter is only invoked when the source found a type map.
    pub async fn extract(
        &self,
        address: &str,
        format: ExportFormat,
    ) -> Result<ExportResult, ExtractError> {
        let raw = match self.source.fetch(address).await? {
            SchemaLookup::Found(raw) => raw,
            SchemaLookup::NotFound => return Err(ExtractError::NotFound(address.to_string())),
        };

        let result = export_schema(&raw, format)?;
        info!(
            "Rendered {} types from {} as {}",
            raw.types.len(),
            address,
            result.format
        );
        Ok(result)
    }

    /// Same as [`SchemaExtractor::extract`] with a caller-supplied format token
    pub async fn extract_with_token(
        &self,
        address: &str,
        format_token: &str,
    ) -> Result<ExportResult, ExtractError> {
        self.extract(address, ExportFormat::from_token(format_token))
            .await
    }
}
