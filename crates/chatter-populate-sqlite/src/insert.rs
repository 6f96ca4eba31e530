//! SQL statement generation for the record table.

use chatter_core::TableDefinition;

/// Generate an idempotent CREATE TABLE statement.
///
/// The primary key is an auto-assigned integer; every other column takes
/// its resolved type (explicit override first, then the declared type).
pub fn generate_create_table(table: &TableDefinition) -> String {
    let mut column_defs = vec![format!(
        "  \"{}\" INTEGER PRIMARY KEY AUTOINCREMENT",
        table.primary_key
    )];
    column_defs.extend(table.columns.iter().map(|column| {
        let null_clause = if column.nullable { "" } else { " NOT NULL" };
        format!(
            "  \"{}\" {}{}",
            column.name,
            column.resolved_type(),
            null_clause
        )
    }));

    format!(
        "CREATE TABLE IF NOT EXISTS \"{}\" (\n{}\n);",
        table.name,
        column_defs.join(",\n")
    )
}

/// Generate the INSERT for a single document column.
///
/// The bound payload goes through SQLite's `json()` so the store re-parses
/// and normalizes it instead of keeping the client's bytes verbatim.
pub fn generate_insert(table: &TableDefinition, column: &str) -> String {
    format!(
        "INSERT INTO \"{}\" (\"{column}\") VALUES (json(?1))",
        table.name
    )
}

/// Generate the SELECT returning every document in insertion order.
///
/// Valid JSON is read back through `json()` so that values stored with
/// numeric affinity (scalar numbers in a `JSON` column) come back as text.
/// Anything else is returned as stored and left to the decoder to reject.
pub fn generate_select(table: &TableDefinition, column: &str) -> String {
    format!(
        "SELECT CASE WHEN json_valid(\"{column}\") THEN json(\"{column}\") ELSE \"{column}\" END \
         FROM \"{}\" ORDER BY \"{}\"",
        table.name, table.primary_key
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatter_core::{ColumnDefinition, Document};

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table(&TableDefinition::messages());

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"messages_table\""));
        assert!(sql.contains("\"id\" INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(sql.contains("\"data\" JSON\n"));
    }

    #[test]
    fn test_generate_create_table_with_override() {
        let table = TableDefinition::new(
            "docs",
            "doc_id",
            vec![ColumnDefinition::typed::<Document>("body").with_type_override("TEXT")],
        );
        let sql = generate_create_table(&table);

        assert!(sql.contains("\"doc_id\" INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(sql.contains("\"body\" TEXT"));
        assert!(!sql.contains("JSON"));
    }

    #[test]
    fn test_generate_insert() {
        let sql = generate_insert(&TableDefinition::messages(), "data");
        assert_eq!(
            sql,
            "INSERT INTO \"messages_table\" (\"data\") VALUES (json(?1))"
        );
    }

    #[test]
    fn test_generate_select() {
        let sql = generate_select(&TableDefinition::messages(), "data");
        assert_eq!(
            sql,
            "SELECT CASE WHEN json_valid(\"data\") THEN json(\"data\") ELSE \"data\" END \
             FROM \"messages_table\" ORDER BY \"id\""
        );
    }
}
