//! SQLite populator for worker-chatter datasets.
//!
//! This crate provides the record store and the run loop that fills it:
//! scenarios are generated one batch at a time, every message is encoded as
//! a JSON document and inserted into `messages_table`.
//!
//! # Example
//!
//! ```rust
//! use chatter_generator::DEFAULT_SEED;
//! use chatter_populate_sqlite::{MessagePopulator, MessageStore, SqliteStore, BATCH_COUNT};
//!
//! let store = SqliteStore::open_in_memory().unwrap();
//! let mut populator = MessagePopulator::new(store, DEFAULT_SEED);
//! populator.create_schema().unwrap();
//!
//! let metrics = populator.populate(BATCH_COUNT).unwrap();
//! assert_eq!(metrics.messages_inserted, 60);
//! assert_eq!(populator.store().query().unwrap().len(), 60);
//! ```

pub mod args;
pub mod error;
pub mod insert;
pub mod populator;
pub mod store;

pub use args::SqlitePopulateArgs;
pub use error::SqlitePopulatorError;
pub use populator::{insert_messages, MessagePopulator, PopulateMetrics, BATCH_COUNT};
pub use store::{MessageStore, SqliteStore};
