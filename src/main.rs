//! Command-line interface for worker-chatter
//!
//! # Usage Examples
//!
//! ```bash
//! # Populate db/workers.db
//! worker-chatter
//!
//! # Write to another directory
//! worker-chatter --db-dir ./out
//! ```

use chatter_generator::DEFAULT_SEED;
use chatter_populate_sqlite::SqlitePopulateArgs;
use clap::Parser;
use worker_chatter::run_populate;

#[derive(Parser)]
#[command(name = "worker-chatter")]
#[command(about = "Generate reproducible worker message datasets into SQLite")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    populate: SqlitePopulateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    tracing::info!(
        "Writing messages to {} (seed={})",
        cli.populate.database_path().display(),
        DEFAULT_SEED
    );

    let metrics = run_populate(&cli.populate)?;

    tracing::info!(
        "Done: {} batches, {} messages inserted",
        metrics.batch_count,
        metrics.messages_inserted
    );
    Ok(())
}
