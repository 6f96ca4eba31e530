//! Error types for the SQLite populator.

use chatter_core::CoreError;
use chatter_generator::GeneratorError;
use thiserror::Error;

/// Errors that can occur during SQLite population.
#[derive(Error, Debug)]
pub enum SqlitePopulatorError {
    /// SQLite connection, schema or query error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Database directory could not be prepared.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document encode/decode or configuration error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
}
