//! Raw type map to normalized data model conversion
//!
//! Walks the raw map in key order and applies name normalization and type
//! classification to every surviving field. Fields are dropped when they are
//! soft-deleted, have no declared type, or are list relations.

use super::classify::classify;
use super::naming::normalize_field_name;
use crate::models::{
    Column, DataModel, FieldKind, ID_COLUMN, RawTypeInfo, RawTypeMap, Relationship, Table,
};
use tracing::{debug, info, warn};

/// Converter from a raw type map to a [`DataModel`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaConverter;

impl SchemaConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert a raw type map into tables and relationships.
    ///
    /// Table order follows the raw map's key order, and column order follows
    /// each field map's key order after the three implicit columns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use app_schema_sdk::convert::SchemaConverter;
    /// use app_schema_sdk::models::RawTypeMap;
    ///
    /// let raw = RawTypeMap::from_json(
    ///     r#"{"Task": {"fields": {"owner_custom_user": {"type": "custom.User"}}}}"#,
    /// ).unwrap();
    /// let model = SchemaConverter::new().convert(&raw);
    /// assert_eq!(model.tables[0].columns[3].name, "owner");
    /// assert_eq!(model.relationships[0].to_string(), "Task.owner -> User._id");
    /// ```
    pub fn convert(&self, raw: &RawTypeMap) -> DataModel {
        let mut tables = Vec::with_capacity(raw.types.len());
        let mut relationships = Vec::new();

        for (type_name, type_info) in raw.iter() {
            let table = self.convert_table(type_name, type_info, &mut relationships);
            tables.push(table);
        }

        info!(
            "Converted {} tables with {} relationships",
            tables.len(),
            relationships.len()
        );

        DataModel::new(tables, relationships)
    }

    fn convert_table(
        &self,
        type_name: &str,
        type_info: &RawTypeInfo,
        relationships: &mut Vec<Relationship>,
    ) -> Table {
        let mut columns: Vec<Column> = Column::implicit_columns().into();

        for (raw_name, field) in type_info.fields() {
            if field.is_deleted() {
                debug!("Skipping deleted field {}.{}", type_name, raw_name);
                continue;
            }

            let Some(declared_type) = field.declared_type() else {
                debug!(
                    "Skipping field {}.{} with no declared type",
                    type_name, raw_name
                );
                continue;
            };

            let kind = classify(declared_type);
            if kind == FieldKind::Excluded {
                debug!(
                    "Skipping list field {}.{} ({})",
                    type_name, raw_name, declared_type
                );
                continue;
            }

            let mut name = normalize_field_name(raw_name, declared_type);
            if columns.iter().any(|c| c.name == name) {
                warn!(
                    "Normalized name '{}' for {}.{} collides with an earlier column, keeping raw key",
                    name, type_name, raw_name
                );
                name = raw_name.to_string();
            }

            let column = match kind {
                FieldKind::Scalar { db_type } => Column::new(name, db_type),
                FieldKind::Reference { target_type } => {
                    relationships.push(Relationship::new(
                        type_name,
                        name.as_str(),
                        target_type.as_str(),
                        ID_COLUMN,
                    ));
                    Column::reference(name, target_type)
                }
                FieldKind::Excluded => continue,
            };
            columns.push(column);
        }

        Table::new(type_name, columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CREATED_DATE_COLUMN, DbType, MODIFIED_DATE_COLUMN};

    fn convert(json: &str) -> DataModel {
        SchemaConverter::new().convert(&RawTypeMap::from_json(json).unwrap())
    }

    #[test]
    fn test_implicit_columns_come_first() {
        let model = convert(r#"{"Task": {"fields": {"title": {"type": "text"}}}}"#);
        let names: Vec<&str> = model.tables[0]
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![ID_COLUMN, CREATED_DATE_COLUMN, MODIFIED_DATE_COLUMN, "title"]
        );
        assert!(model.tables[0].columns[0].primary_key);
        assert_eq!(model.tables[0].columns[1].db_type, DbType::Timestamp);
    }

    #[test]
    fn test_skips_deleted_untyped_and_list_fields() {
        let model = convert(
            r#"{"Task": {"fields": {
                "gone": {"type": "text", "deleted": true},
                "untyped": {},
                "empty": {"type": ""},
                "tags": {"type": "list.text"},
                "kept": {"type": "number", "deleted": false}
            }}}"#,
        );
        let declared: Vec<&str> = model.tables[0]
            .declared_columns()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(declared, vec!["kept"]);
        assert!(model.relationships.is_empty());
    }

    #[test]
    fn test_list_of_references_adds_no_relationship() {
        let model = convert(r#"{"Task": {"fields": {"watchers": {"type": "list.custom.User"}}}}"#);
        assert!(model.relationships.is_empty());
        assert_eq!(model.tables[0].declared_columns().count(), 0);
    }

    #[test]
    fn test_references_collect_relationships() {
        let model = convert(
            r#"{"Task": {"fields": {
                "assignee": {"type": "user"},
                "project_custom_project": {"type": "custom.Project"}
            }}}"#,
        );
        let rels: Vec<String> = model.relationships.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            rels,
            vec!["Task.assignee -> user._id", "Task.project -> Project._id"]
        );
        let project = model.tables[0].column("project").unwrap();
        assert_eq!(project.db_type, DbType::Text);
        assert_eq!(project.foreign_key.as_ref().unwrap().target_type, "Project");
    }

    #[test]
    fn test_preserves_table_and_field_order() {
        let model = convert(
            r#"{"B": {"fields": {"z": {"type": "text"}, "a": {"type": "text"}}}, "A": {"fields": {}}}"#,
        );
        assert_eq!(model.tables[0].name, "B");
        assert_eq!(model.tables[1].name, "A");
        let declared: Vec<&str> = model.tables[0]
            .declared_columns()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(declared, vec!["z", "a"]);
    }

    #[test]
    fn test_colliding_names_keep_raw_key() {
        let model = convert(
            r#"{"Task": {"fields": {"title": {"type": "text"}, "title_text": {"type": "text"}}}}"#,
        );
        let declared: Vec<&str> = model.tables[0]
            .declared_columns()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(declared, vec!["title", "title_text"]);
    }

    #[test]
    fn test_type_without_fields_still_gets_implicit_columns() {
        let model = convert(r#"{"Empty": {}}"#);
        assert_eq!(model.tables[0].columns.len(), 3);
    }
}
