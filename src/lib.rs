//! worker-chatter library
//!
//! Generates reproducible conversations between a pool of workers and stores
//! every message as a JSON document in SQLite.
//!
//! # Crates
//!
//! - `chatter_core` - worker ids, messages, the document codec and table definitions
//! - `chatter_generator` - seed expansion and scenario generation
//! - `chatter_populate_sqlite` - SQLite store and the populate loop
//!
//! # CLI Usage
//!
//! ```bash
//! # Write 10 scenarios (60 messages) to db/workers.db
//! worker-chatter
//!
//! # Same data, different location, verbose logging
//! RUST_LOG=debug worker-chatter --db-dir /tmp/chatter
//! ```

use anyhow::Context;
use chatter_generator::DEFAULT_SEED;
use chatter_populate_sqlite::{
    MessagePopulator, PopulateMetrics, SqlitePopulateArgs, SqliteStore, BATCH_COUNT,
};

/// Run a full populate: open the database, create the table and write
/// [`BATCH_COUNT`] scenarios generated from [`DEFAULT_SEED`].
pub fn run_populate(args: &SqlitePopulateArgs) -> anyhow::Result<PopulateMetrics> {
    let store = SqliteStore::open_in_dir(&args.db_dir, &args.db_file).with_context(|| {
        format!("Failed to open database at {}", args.database_path().display())
    })?;

    let mut populator = MessagePopulator::new(store, DEFAULT_SEED);
    populator.create_schema().context("Failed to create tables")?;

    let metrics = populator
        .populate(BATCH_COUNT)
        .context("Failed to populate messages")?;

    if metrics.messages_skipped > 0 {
        tracing::warn!(
            "{} of {} messages were skipped",
            metrics.messages_skipped,
            metrics.messages_generated
        );
    }

    Ok(metrics)
}
