//! Raw JSON exporter: the unconverted type map, pretty printed.

use super::ExportError;
use crate::models::RawTypeMap;

/// Exporter that serializes the raw type map as it was received.
///
/// Bypasses name normalization and type classification entirely. Every key
/// is written in input order, `null` values and keys the converter ignores
/// included.
pub struct RawJsonExporter;

impl RawJsonExporter {
    /// Serialize the raw map as indented JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use app_schema_sdk::export::raw_json::RawJsonExporter;
    /// use app_schema_sdk::models::RawTypeMap;
    ///
    /// let raw = RawTypeMap::from_json(r#"{"Task": {"fields": {"x_text": {"type": "text"}}}}"#).unwrap();
    /// let json = RawJsonExporter::export(&raw).unwrap();
    /// assert_eq!(RawTypeMap::from_json(&json).unwrap(), raw);
    /// ```
    pub fn export(raw: &RawTypeMap) -> Result<String, ExportError> {
        serde_json::to_string_pretty(raw.document())
            .map_err(|e| ExportError::SerializationError(e.to_string()))
    }
}
