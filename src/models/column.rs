//! Column model for the SDK

use super::enums::DbType;
use serde::{Deserialize, Serialize};

/// Name of the primary identifier column every table carries
pub const ID_COLUMN: &str = "_id";

/// Name of the implicit creation timestamp column
pub const CREATED_DATE_COLUMN: &str = "created_date";

/// Name of the implicit modification timestamp column
pub const MODIFIED_DATE_COLUMN: &str = "modified_date";

/// Foreign key reference to another type's identifier column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForeignKey {
    /// Name of the referenced type
    pub target_type: String,
    /// Column name in the target type
    pub column_name: String,
}

impl ForeignKey {
    /// Reference to the identifier column of `target_type`
    pub fn to_type(target_type: impl Into<String>) -> Self {
        Self {
            target_type: target_type.into(),
            column_name: ID_COLUMN.to_string(),
        }
    }
}

/// Column model representing a normalized field in a table
///
/// # Example
///
/// ```rust
/// use app_schema_sdk::models::{Column, DbType};
///
/// let column = Column::new("title", DbType::Text);
/// assert!(column.foreign_key.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    /// Normalized column name
    pub name: String,
    /// Scalar kind
    pub db_type: DbType,
    /// Whether this column is the primary key (default: false)
    #[serde(default)]
    pub primary_key: bool,
    /// Whether the column was added by the converter rather than declared (default: false)
    #[serde(default)]
    pub implicit: bool,
    /// Foreign key reference if this column references another type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKey>,
}

impl Column {
    pub fn new(name: impl Into<String>, db_type: DbType) -> Self {
        Self {
            name: name.into(),
            db_type,
            primary_key: false,
            implicit: false,
            foreign_key: None,
        }
    }

    /// Reference column pointing at the identifier of `target_type`
    ///
    /// Reference columns are stored as text, matching the identifier column.
    pub fn reference(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            foreign_key: Some(ForeignKey::to_type(target_type)),
            ..Self::new(name, DbType::Text)
        }
    }

    /// The three columns every table carries before its declared fields
    pub fn implicit_columns() -> [Column; 3] {
        [
            Column {
                primary_key: true,
                implicit: true,
                ..Column::new(ID_COLUMN, DbType::Text)
            },
            Column {
                implicit: true,
                ..Column::new(CREATED_DATE_COLUMN, DbType::Timestamp)
            },
            Column {
                implicit: true,
                ..Column::new(MODIFIED_DATE_COLUMN, DbType::Timestamp)
            },
        ]
    }
}
