//! Table definitions for the record store.
//!
//! The store holds a single table: a surrogate integer key plus one
//! document column. Column types come from the value type's
//! [`StorageType`] declaration unless an explicit override is supplied.

use crate::document::{Document, StorageType};

/// Name of the table messages are stored in.
pub const MESSAGES_TABLE: &str = "messages_table";

/// Name of the document column in [`MESSAGES_TABLE`].
pub const DOCUMENT_COLUMN: &str = "data";

/// A single non-key column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Column name
    pub name: String,

    /// Type declared by the stored value type
    pub declared_type: String,

    /// Explicit column type, takes precedence over `declared_type`
    pub type_override: Option<String>,

    /// Whether this column is nullable
    pub nullable: bool,
}

impl ColumnDefinition {
    /// Create a nullable column whose type is declared by `T`.
    pub fn typed<T: StorageType>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: T::db_data_type().to_string(),
            type_override: None,
            nullable: true,
        }
    }

    /// Force the column type regardless of the value type's declaration.
    pub fn with_type_override(mut self, column_type: impl Into<String>) -> Self {
        self.type_override = Some(column_type.into());
        self
    }

    /// Column type to use in DDL.
    pub fn resolved_type(&self) -> &str {
        self.type_override.as_deref().unwrap_or(&self.declared_type)
    }
}

/// A table with an auto-assigned integer primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    /// Table name
    pub name: String,

    /// Surrogate key column name
    pub primary_key: String,

    /// Column definitions (excluding primary key)
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(
        name: impl Into<String>,
        primary_key: impl Into<String>,
        columns: Vec<ColumnDefinition>,
    ) -> Self {
        Self {
            name: name.into(),
            primary_key: primary_key.into(),
            columns,
        }
    }

    /// The message table: `id` plus a `data` document column.
    pub fn messages() -> Self {
        Self::new(
            MESSAGES_TABLE,
            "id",
            vec![ColumnDefinition::typed::<Document>(DOCUMENT_COLUMN)],
        )
    }

    /// Get a column definition by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all non-key column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
