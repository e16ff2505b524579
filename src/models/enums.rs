//! Enums for schema conversion
//!
//! # Serde Casing Conventions
//!
//! - `lowercase`: scalar kinds and format tokens, matching the words that appear
//!   in rendered output (`text`, `numeric`, `dbml`, ...)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar storage kind of a column
///
/// Each renderer has its own vocabulary for these kinds; the enum itself is
/// renderer-neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    Text,
    Numeric,
    Timestamp,
    Boolean,
}

impl DbType {
    /// Token used by the relational (DBML) renderer
    pub fn as_sql(&self) -> &'static str {
        match self {
            DbType::Text => "text",
            DbType::Numeric => "numeric",
            DbType::Timestamp => "timestamp",
            DbType::Boolean => "boolean",
        }
    }

    /// Token used by the diagram (Mermaid) renderer
    pub fn as_diagram(&self) -> &'static str {
        match self {
            DbType::Text => "string",
            DbType::Numeric => "int",
            DbType::Timestamp => "date",
            DbType::Boolean => "bool",
        }
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Classification of a declared field type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldKind {
    /// Plain column of the given kind
    Scalar { db_type: DbType },
    /// Single-valued foreign key to another type
    Reference { target_type: String },
    /// Multi-valued relation, not representable as a column
    Excluded,
}
