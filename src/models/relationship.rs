//! Relationship model for the SDK

use serde::{Deserialize, Serialize};
use std::fmt;

/// Foreign-key relationship inferred from a reference field
///
/// Reads as `source_table.source_column -> target_table.target_column`.
///
/// # Example
///
/// ```rust
/// use app_schema_sdk::models::Relationship;
///
/// let rel = Relationship::new("Task", "owner", "User", "_id");
/// assert_eq!(rel.to_string(), "Task.owner -> User._id");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Relationship {
    pub source_table: String,
    pub source_column: String,
    pub target_table: String,
    pub target_column: String,
}

impl Relationship {
    pub fn new(
        source_table: impl Into<String>,
        source_column: impl Into<String>,
        target_table: impl Into<String>,
        target_column: impl Into<String>,
    ) -> Self {
        Self {
            source_table: source_table.into(),
            source_column: source_column.into(),
            target_table: target_table.into(),
            target_column: target_column.into(),
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} -> {}.{}",
            self.source_table, self.source_column, self.target_table, self.target_column
        )
    }
}
