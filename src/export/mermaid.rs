//! Mermaid exporter for the entity-relationship diagram view of a data model.

use crate::models::{Column, DataModel, Relationship, Table};
use crate::validation::input::sanitize_diagram_identifier;
use std::collections::{HashMap, HashSet};

/// Exporter for Mermaid `erDiagram` syntax.
///
/// Uses the diagram vocabulary (`string`, `int`, `date`, `bool`). Reference
/// columns are plain `string` attributes; the link itself is drawn as a
/// relationship line after the entity blocks.
pub struct MermaidExporter;

/// Sanitized identifiers handed out so far within one scope
#[derive(Default)]
struct IdentifierSet {
    used: HashSet<String>,
}

impl IdentifierSet {
    /// Sanitize `name`, suffixing `_2`, `_3`, ... when the result is taken
    fn claim(&mut self, name: &str) -> String {
        let base = sanitize_diagram_identifier(name);
        let mut candidate = base.clone();
        let mut n = 2;
        while !self.used.insert(candidate.clone()) {
            candidate = format!("{}_{}", base, n);
            n += 1;
        }
        candidate
    }
}

impl MermaidExporter {
    /// Export the model as a complete `erDiagram`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use app_schema_sdk::export::mermaid::MermaidExporter;
    /// use app_schema_sdk::models::{Column, DataModel, DbType, Table};
    ///
    /// let table = Table::new("Task", vec![Column::new("done", DbType::Boolean)]);
    /// let diagram = MermaidExporter::export_model(&DataModel::new(vec![table], Vec::new()));
    /// assert!(diagram.starts_with("erDiagram\n"));
    /// assert!(diagram.contains("        bool done\n"));
    /// ```
    pub fn export_model(model: &DataModel) -> String {
        let mut diagram = String::from("erDiagram\n");

        let mut entities = IdentifierSet::default();
        let mut entity_ids: HashMap<&str, String> = HashMap::new();
        for table in &model.tables {
            let id = entities.claim(&table.name);
            diagram.push_str(&Self::render_entity(&id, table));
            entity_ids.entry(table.name.as_str()).or_insert(id);
        }

        for relationship in &model.relationships {
            diagram.push_str(&Self::export_relationship(relationship, &entity_ids));
        }

        diagram
    }

    /// Export a single entity block.
    pub fn export_entity(table: &Table) -> String {
        Self::render_entity(&sanitize_diagram_identifier(&table.name), table)
    }

    fn render_entity(id: &str, table: &Table) -> String {
        let mut attributes = IdentifierSet::default();
        let mut entity = format!("    {} {{\n", id);
        for column in &table.columns {
            entity.push_str("        ");
            entity.push_str(&Self::export_attribute(column, &mut attributes));
            entity.push('\n');
        }
        entity.push_str("    }\n");
        entity
    }

    fn export_attribute(column: &Column, attributes: &mut IdentifierSet) -> String {
        let mut line = format!(
            "{} {}",
            column.db_type.as_diagram(),
            attributes.claim(&column.name)
        );
        if column.primary_key {
            line.push_str(" PK");
        }
        line
    }

    /// Many source rows may point at one target row; the source end is optional.
    fn export_relationship(
        relationship: &Relationship,
        entity_ids: &HashMap<&str, String>,
    ) -> String {
        let entity_id = |name: &str| {
            entity_ids
                .get(name)
                .cloned()
                .unwrap_or_else(|| sanitize_diagram_identifier(name))
        };
        format!(
            "    {} }}o--|| {} : \"{}\"\n",
            entity_id(&relationship.source_table),
            entity_id(&relationship.target_table),
            relationship.source_column.replace('"', "'")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DbType;

    #[test]
    fn test_diagram_vocabulary() {
        let table = Table::new(
            "Invoice",
            vec![
                Column::new("amount", DbType::Numeric),
                Column::new("issued", DbType::Timestamp),
                Column::new("paid", DbType::Boolean),
                Column::new("memo", DbType::Text),
            ],
        );
        assert_eq!(
            MermaidExporter::export_entity(&table),
            "    Invoice {\n        int amount\n        date issued\n        bool paid\n        string memo\n    }\n"
        );
    }

    #[test]
    fn test_reference_is_plain_string_with_relationship_line() {
        let table = Table::new("Task", vec![Column::reference("owner", "User")]);
        let model = DataModel::new(
            vec![table],
            vec![Relationship::new("Task", "owner", "User", "_id")],
        );
        let diagram = MermaidExporter::export_model(&model);
        assert!(diagram.contains("        string owner\n"));
        assert!(diagram.ends_with("    Task }o--|| User : \"owner\"\n"));
    }

    #[test]
    fn test_primary_key_marker() {
        let table = Table::new("Task", Column::implicit_columns().to_vec());
        let entity = MermaidExporter::export_entity(&table);
        assert!(entity.contains("        string _id PK\n"));
        assert!(entity.contains("        date created_date\n"));
        assert!(entity.contains("        date modified_date\n"));
    }

    #[test]
    fn test_colliding_attribute_names_stay_distinct() {
        let table = Table::new(
            "Line",
            vec![
                Column::new("unit price", DbType::Numeric),
                Column::new("unit_price", DbType::Text),
                Column::new("2nd address", DbType::Text),
            ],
        );
        assert_eq!(
            MermaidExporter::export_entity(&table),
            "    Line {\n        int unit_price\n        string unit_price_2\n        string _2nd_address\n    }\n"
        );
    }

    #[test]
    fn test_colliding_entity_names_keep_relationships_apart() {
        let model = DataModel::new(
            vec![
                Table::new("Order Line", Vec::new()),
                Table::new("Order_Line", vec![Column::reference("parent", "Order Line")]),
            ],
            vec![Relationship::new("Order_Line", "parent", "Order Line", "_id")],
        );
        let diagram = MermaidExporter::export_model(&model);
        assert!(diagram.contains("    Order_Line {\n"));
        assert!(diagram.contains("    Order_Line_2 {\n"));
        assert!(diagram.ends_with("    Order_Line_2 }o--|| Order_Line : \"parent\"\n"));
    }

    #[test]
    fn test_sanitizes_names() {
        let table = Table::new("Order Line", vec![Column::new("unit price", DbType::Numeric)]);
        let entity = MermaidExporter::export_entity(&table);
        assert!(entity.starts_with("    Order_Line {\n"));
        assert!(entity.contains("int unit_price"));
    }
}
