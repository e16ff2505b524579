//! DBML exporter for the relational schema view of a data model.

use crate::models::{Column, DataModel, Table};
use crate::validation::input::is_plain_identifier;

/// Exporter for DBML (relational schema definition language).
///
/// Foreign keys are written inline on the referencing column
/// (`owner text [ref: > User._id]`) rather than as separate `Ref:` blocks.
pub struct DbmlExporter;

impl DbmlExporter {
    /// Export every table of the model, separated by blank lines.
    ///
    /// # Example
    ///
    /// ```rust
    /// use app_schema_sdk::export::dbml::DbmlExporter;
    /// use app_schema_sdk::models::{Column, DataModel, Table};
    ///
    /// let mut columns = Column::implicit_columns().to_vec();
    /// columns.push(Column::reference("owner", "User"));
    /// let model = DataModel::new(vec![Table::new("Task", columns)], Vec::new());
    ///
    /// let dbml = DbmlExporter::export_model(&model);
    /// assert!(dbml.contains("Table Task {"));
    /// assert!(dbml.contains("  _id text [pk]"));
    /// assert!(dbml.contains("  owner text [ref: > User._id]"));
    /// ```
    pub fn export_model(model: &DataModel) -> String {
        model
            .tables
            .iter()
            .map(Self::export_table)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Export a single table block.
    pub fn export_table(table: &Table) -> String {
        let mut dbml = format!("Table {} {{\n", quote_identifier(&table.name));
        for column in &table.columns {
            dbml.push_str("  ");
            dbml.push_str(&Self::export_column(column));
            dbml.push('\n');
        }
        dbml.push_str("}\n");
        dbml
    }

    fn export_column(column: &Column) -> String {
        let mut line = format!(
            "{} {}",
            quote_identifier(&column.name),
            column.db_type.as_sql()
        );

        let mut settings = Vec::new();
        if column.primary_key {
            settings.push("pk".to_string());
        }
        if let Some(fk) = &column.foreign_key {
            settings.push(format!(
                "ref: > {}.{}",
                quote_identifier(&fk.target_type),
                quote_identifier(&fk.column_name)
            ));
        }

        if !settings.is_empty() {
            line.push_str(&format!(" [{}]", settings.join(", ")));
        }
        line
    }
}

/// Double-quote identifiers that are not plain `[A-Za-z_][A-Za-z0-9_]*`
fn quote_identifier(name: &str) -> String {
    if is_plain_identifier(name) {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('"', "\\\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DbType;

    #[test]
    fn test_scalar_vocabulary() {
        let table = Table::new(
            "Invoice",
            vec![
                Column::new("amount", DbType::Numeric),
                Column::new("issued", DbType::Timestamp),
                Column::new("paid", DbType::Boolean),
                Column::new("memo", DbType::Text),
            ],
        );
        let dbml = DbmlExporter::export_table(&table);
        assert_eq!(
            dbml,
            "Table Invoice {\n  amount numeric\n  issued timestamp\n  paid boolean\n  memo text\n}\n"
        );
    }

    #[test]
    fn test_quotes_unusual_identifiers() {
        let table = Table::new(
            "Order Line",
            vec![Column::reference("parent order", "Sales Order")],
        );
        let dbml = DbmlExporter::export_table(&table);
        assert!(dbml.starts_with("Table \"Order Line\" {"));
        assert!(dbml.contains("\"parent order\" text [ref: > \"Sales Order\"._id]"));
    }

    #[test]
    fn test_tables_separated_by_blank_line() {
        let model = DataModel::new(
            vec![Table::new("A", Vec::new()), Table::new("B", Vec::new())],
            Vec::new(),
        );
        assert_eq!(
            DbmlExporter::export_model(&model),
            "Table A {\n}\n\nTable B {\n}\n"
        );
    }
}
