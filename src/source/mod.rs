//! Schema sources
//!
//! A schema source turns a target address into a raw type map, or reports
//! that the target has no schema. Sources own all network and file access;
//! the converter and renderers never perform I/O.
//!
//! Implementations:
//! - `http`: fetches the schema document of a hosted application
//! - `file`: reads a raw type map dumped to disk

#[cfg(feature = "native-fs")]
pub mod file;
#[cfg(feature = "api-backend")]
pub mod http;

use crate::models::RawTypeMap;
use crate::validation::input::{ValidationError, validate_app_name, validate_url};
use async_trait::async_trait;
use serde_json::Value;

#[cfg(feature = "native-fs")]
pub use file::FileSchemaSource;
#[cfg(feature = "api-backend")]
pub use http::HttpSchemaSource;

/// Outcome of a successful lookup
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaLookup {
    /// The target exposed a type map
    Found(RawTypeMap),
    /// The target exists but has no schema, or does not exist
    NotFound,
}

/// Errors raised by a schema source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] ValidationError),
    #[error("Transient failure: {0}")]
    Transient(String),
    #[error("Request rejected with status {0}")]
    Rejected(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Source of raw type maps
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Look up the raw type map for `address`
    async fn fetch(&self, address: &str) -> Result<SchemaLookup, SourceError>;
}

/// Turn an application name or URL into a base URL without trailing slash.
///
/// Addresses containing `://` are treated as URLs; anything else must be a
/// valid application name and is expanded through `url_template`, in which
/// `{name}` is replaced by the name.
///
/// # Example
///
/// ```rust
/// use app_schema_sdk::source::resolve_address;
///
/// let url = resolve_address("my-app", "https://{name}.example.com").unwrap();
/// assert_eq!(url, "https://my-app.example.com");
/// let url = resolve_address("http://localhost:8080/", "https://{name}.example.com").unwrap();
/// assert_eq!(url, "http://localhost:8080");
/// ```
pub fn resolve_address(address: &str, url_template: &str) -> Result<String, SourceError> {
    let address = address.trim();

    let url = if address.contains("://") {
        address.to_string()
    } else {
        validate_app_name(address)?;
        url_template.replace("{name}", &address.to_lowercase())
    };

    validate_url(&url)?;
    Ok(url.trim_end_matches('/').to_string())
}

/// Pull the type map out of a schema document.
///
/// With a wrapper key, the map is read from that key and `Ok(None)` means the
/// key is missing (schema not yet available). Without one, the document is
/// the map itself. A JSON `null` in either position means "no schema".
pub(crate) fn extract_type_map(
    document: Value,
    types_key: Option<&str>,
) -> Result<Option<SchemaLookup>, SourceError> {
    let map_value = match (document, types_key) {
        (Value::Null, _) => return Ok(Some(SchemaLookup::NotFound)),
        (Value::Object(mut wrapper), Some(key)) => match wrapper.remove(key) {
            Some(value) => value,
            None => return Ok(None),
        },
        (Value::Object(map), None) => Value::Object(map),
        (other, _) => {
            return Err(SourceError::Parse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )));
        }
    };

    match map_value {
        Value::Null => Ok(Some(SchemaLookup::NotFound)),
        Value::Object(_) => RawTypeMap::from_value(map_value)
            .map(|raw| Some(SchemaLookup::Found(raw)))
            .map_err(|e| SourceError::Parse(e.to_string())),
        other => Err(SourceError::Parse(format!(
            "expected the type map to be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Parse a complete schema document, such as a file dump.
///
/// Unlike a live fetch, a dump is never waiting for its schema: when the
/// wrapper key is absent the document root is taken as the type map itself.
///
/// # Example
///
/// ```rust
/// use app_schema_sdk::source::{SchemaLookup, parse_document};
///
/// let wrapped = serde_json::json!({"user_types": {"Task": {"fields": {}}}});
/// assert!(matches!(parse_document(wrapped, Some("user_types")), Ok(SchemaLookup::Found(_))));
///
/// let bare = serde_json::json!({"Task": {"fields": {}}});
/// assert!(matches!(parse_document(bare, Some("user_types")), Ok(SchemaLookup::Found(_))));
/// ```
pub fn parse_document(
    document: Value,
    types_key: Option<&str>,
) -> Result<SchemaLookup, SourceError> {
    let key = types_key.filter(|k| document.get(*k).is_some());
    Ok(extract_type_map(document, key)?.unwrap_or(SchemaLookup::NotFound))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_rejects_bad_names() {
        assert!(matches!(
            resolve_address("bad name", "https://{name}.example.com"),
            Err(SourceError::InvalidAddress(_))
        ));
        assert!(matches!(
            resolve_address("ftp://example.com", "https://{name}.example.com"),
            Err(SourceError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_resolve_lowercases_names() {
        assert_eq!(
            resolve_address("MyApp", "https://{name}.example.com").unwrap(),
            "https://myapp.example.com"
        );
    }

    #[test]
    fn test_extract_wrapped_map() {
        let doc = json!({"user_types": {"Task": {"fields": {}}}, "other": 1});
        let lookup = extract_type_map(doc, Some("user_types")).unwrap().unwrap();
        match lookup {
            SchemaLookup::Found(raw) => assert_eq!(raw.types.len(), 1),
            SchemaLookup::NotFound => panic!("expected a type map"),
        }
    }

    #[test]
    fn test_extract_missing_key_is_not_ready() {
        let doc = json!({"other": 1});
        assert!(extract_type_map(doc, Some("user_types")).unwrap().is_none());
    }

    #[test]
    fn test_extract_null_is_not_found() {
        assert_eq!(
            extract_type_map(Value::Null, None).unwrap(),
            Some(SchemaLookup::NotFound)
        );
        assert_eq!(
            extract_type_map(json!({"user_types": null}), Some("user_types")).unwrap(),
            Some(SchemaLookup::NotFound)
        );
    }

    #[test]
    fn test_extract_rejects_non_objects() {
        assert!(matches!(
            extract_type_map(json!([1, 2]), None),
            Err(SourceError::Parse(_))
        ));
        assert!(matches!(
            extract_type_map(json!({"user_types": "x"}), Some("user_types")),
            Err(SourceError::Parse(_))
        ));
    }
}
