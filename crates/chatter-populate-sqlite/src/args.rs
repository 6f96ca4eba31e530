//! CLI argument definitions for the SQLite populator.

use clap::Args;
use std::path::PathBuf;

/// SQLite populate arguments.
///
/// Only the database location can be chosen. The seed, batch count and
/// worker pool are fixed so every run produces the same dataset.
#[derive(Args, Clone, Debug)]
pub struct SqlitePopulateArgs {
    /// Directory holding the database file (created if missing)
    #[arg(long, default_value = "db")]
    pub db_dir: PathBuf,

    /// Database file name inside the directory
    #[arg(long, default_value = "workers.db")]
    pub db_file: String,
}

impl SqlitePopulateArgs {
    /// Full path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.db_dir.join(&self.db_file)
    }
}
