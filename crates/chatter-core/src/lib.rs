//! Core types for the worker-chatter dataset generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the store adapters:
//!
//! - [`WorkerId`] / [`WorkerPool`] - identifiers of the simulated workers
//! - [`Message`] - one generated message, serialized as a JSON document
//! - [`Document`] - opaque JSON payload with a lossless codec
//! - [`TableDefinition`] - the single record table and its document column
//!
//! # Architecture
//!
//! ```text
//! chatter-core (this crate)
//!    │
//!    ├─── chatter-generator        (seeded scenario generation)
//!    │
//!    └─── chatter-populate-sqlite  (Store implementation + populator)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatter_core::{Document, Message, WorkerId};
//!
//! let message = Message::new(WorkerId::new(1), "Olá, como vai?", 2, WorkerId::new(3));
//! let document = Document::from_value(&message).unwrap();
//! let back: Message = document.to_value().unwrap();
//! assert_eq!(back, message);
//! ```

pub mod document;
pub mod error;
pub mod schema;
pub mod types;

// Re-exports for convenience
pub use document::{Document, StorageType};
pub use error::CoreError;
pub use schema::{ColumnDefinition, TableDefinition, DOCUMENT_COLUMN, MESSAGES_TABLE};
pub use types::{Message, WorkerId, WorkerPool, DEFAULT_POOL_SIZE, MIN_POOL_SIZE};
