//! Raw type map as delivered by the schema source
//!
//! The raw map is loosely typed: every table and field entry is an object
//! whose sub-keys may or may not be present. Only `fields`, `type` and
//! `deleted` carry meaning for conversion. The document itself is kept as
//! received so the raw exporter can write it back out unchanged.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Description of a single field as found in the raw map
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawFieldInfo {
    /// Declared type token (`text`, `custom.Order`, `list.text`, ...)
    #[serde(rename = "type", default)]
    pub declared_type: Option<String>,
    /// Soft-delete flag
    #[serde(default)]
    pub deleted: Option<bool>,
}

impl RawFieldInfo {
    /// Only an explicit `deleted: true` marks the field as removed
    pub fn is_deleted(&self) -> bool {
        self.deleted == Some(true)
    }

    /// Declared type, treating an empty string the same as a missing key
    pub fn declared_type(&self) -> Option<&str> {
        self.declared_type.as_deref().filter(|t| !t.is_empty())
    }
}

/// Description of a single type (table) as found in the raw map
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawTypeInfo {
    /// Field map, in declaration order
    #[serde(default)]
    pub fields: Option<IndexMap<String, RawFieldInfo>>,
}

impl RawTypeInfo {
    /// Iterate fields in declaration order; a type without a field map has none
    pub fn fields(&self) -> impl Iterator<Item = (&str, &RawFieldInfo)> {
        self.fields
            .iter()
            .flatten()
            .map(|(name, field)| (name.as_str(), field))
    }
}

/// The raw type map: type name to type description, in input order
///
/// Holds both the document as received and the typed view the converter
/// reads. The two are built together and never diverge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTypeMap {
    document: Map<String, Value>,
    pub types: IndexMap<String, RawTypeInfo>,
}

impl RawTypeMap {
    /// Parse a raw type map from JSON text
    ///
    /// # Example
    ///
    /// ```rust
    /// use app_schema_sdk::models::RawTypeMap;
    ///
    /// let raw = RawTypeMap::from_json(r#"{"Task": {"fields": {"title": {"type": "text"}}}}"#).unwrap();
    /// assert_eq!(raw.types.len(), 1);
    /// ```
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        Self::from_document(serde_json::from_str(content)?)
    }

    /// Build a raw type map from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        Self::from_document(serde_json::from_value(value)?)
    }

    fn from_document(document: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let types = document
            .iter()
            .map(|(name, info)| -> Result<_, serde_json::Error> {
                Ok((name.clone(), RawTypeInfo::deserialize(info)?))
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;

        Ok(Self { document, types })
    }

    /// The document exactly as received, key order included
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawTypeInfo)> {
        self.types.iter().map(|(name, info)| (name.as_str(), info))
    }
}
