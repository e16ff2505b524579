//! Table model for the SDK

use super::column::Column;
use serde::{Deserialize, Serialize};

/// Table model: one per type in the raw map
///
/// Columns are kept in output order: implicit columns first, then declared
/// fields in the order the raw map listed them.
///
/// # Example
///
/// ```rust
/// use app_schema_sdk::models::{Column, DbType, Table};
///
/// let table = Table::new("Task", vec![Column::new("title", DbType::Text)]);
/// assert_eq!(table.column("title").unwrap().db_type, DbType::Text);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    /// Table name (the raw type name)
    pub name: String,
    /// Columns in output order
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns that came from the raw field map
    pub fn declared_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.implicit)
    }
}
