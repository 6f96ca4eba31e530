//! Record store backed by SQLite.

use crate::error::SqlitePopulatorError;
use crate::insert::{generate_create_table, generate_insert, generate_select};
use chatter_core::{Document, TableDefinition, DOCUMENT_COLUMN};
use rusqlite::{params, Connection};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Storage for encoded message documents.
///
/// Records are append-only: once inserted, a payload is never updated.
pub trait MessageStore {
    /// Ensure the record table exists. Safe to call more than once.
    fn create_schema(&mut self) -> Result<(), SqlitePopulatorError>;

    /// Insert one payload and return its store-assigned id.
    fn insert(&mut self, payload: &Document) -> Result<i64, SqlitePopulatorError>;

    /// Return every stored payload in insertion order.
    fn query(&self) -> Result<Vec<Document>, SqlitePopulatorError>;
}

/// SQLite store holding messages in a single JSON column.
pub struct SqliteStore {
    conn: Connection,
    table: TableDefinition,
    document_column: &'static str,
}

impl SqliteStore {
    /// Open (or create) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SqlitePopulatorError> {
        let path = path.as_ref();
        info!("Opening SQLite database: {}", path.display());
        Ok(Self::with_connection(Connection::open(path)?))
    }

    /// Create `dir` if needed and open `file` inside it.
    pub fn open_in_dir(
        dir: impl AsRef<Path>,
        file: impl AsRef<Path>,
    ) -> Result<Self, SqlitePopulatorError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        Self::open(dir.join(file))
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, SqlitePopulatorError> {
        Ok(Self::with_connection(Connection::open_in_memory()?))
    }

    fn with_connection(conn: Connection) -> Self {
        Self {
            conn,
            table: TableDefinition::messages(),
            document_column: DOCUMENT_COLUMN,
        }
    }

    /// Get a reference to the table definition.
    pub fn table(&self) -> &TableDefinition {
        &self.table
    }

    /// Get the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Get the number of stored records.
    pub fn row_count(&self) -> Result<u64, SqlitePopulatorError> {
        let sql = format!("SELECT COUNT(*) FROM \"{}\"", self.table.name);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

impl MessageStore for SqliteStore {
    fn create_schema(&mut self) -> Result<(), SqlitePopulatorError> {
        let sql = generate_create_table(&self.table);
        info!("Creating table: {}", self.table.name);
        debug!("DDL: {}", sql);
        self.conn.execute_batch(&sql)?;
        Ok(())
    }

    fn insert(&mut self, payload: &Document) -> Result<i64, SqlitePopulatorError> {
        let sql = generate_insert(&self.table, self.document_column);
        let mut stmt = self.conn.prepare_cached(&sql)?;
        stmt.execute(params![payload])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn query(&self) -> Result<Vec<Document>, SqlitePopulatorError> {
        let sql = generate_select(&self.table, self.document_column);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;

        let mut documents = Vec::new();
        while let Some(row) = rows.next()? {
            documents.push(Document::scan(row.get_ref(0)?)?);
        }
        Ok(documents)
    }
}
