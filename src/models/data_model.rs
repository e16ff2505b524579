//! DataModel for the SDK

use super::relationship::Relationship;
use super::table::Table;
use serde::{Deserialize, Serialize};

/// Converted schema: normalized tables plus the relationships between them
///
/// Built fresh from a raw type map for every request and dropped once
/// rendered.
///
/// # Example
///
/// ```rust
/// use app_schema_sdk::models::{DataModel, Table};
///
/// let model = DataModel::new(vec![Table::new("Task", Vec::new())], Vec::new());
/// assert!(model.table("Task").is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataModel {
    /// Tables in raw map order
    #[serde(default)]
    pub tables: Vec<Table>,
    /// Relationships in the order their reference fields were encountered
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl DataModel {
    pub fn new(tables: Vec<Table>, relationships: Vec<Relationship>) -> Self {
        Self {
            tables,
            relationships,
        }
    }

    /// Look up a table by name
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}
