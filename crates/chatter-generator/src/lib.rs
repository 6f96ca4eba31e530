//! Scenario generator for worker-chatter datasets.
//!
//! This crate turns a 64-bit seed into a reproducible stream of scenarios.
//! Each scenario is a short conversation between three distinct workers,
//! six messages long, with timing offsets derived from a fixed reply graph.
//!
//! # Architecture
//!
//! ```text
//!      seed (u64)
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  GeneratorState  │   ChaCha8, key = seed bytes (LE) + zero padding
//! └────────┬─────────┘
//!          │ &mut, fixed draw order
//!          ▼
//! ┌──────────────────┐
//! │ScenarioGenerator │   multiplier → worker permutation → 6 deltas
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Scenario { base_interval, workers, messages: [Message; 6] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatter_core::WorkerPool;
//! use chatter_generator::{GeneratorState, ScenarioGenerator};
//!
//! let mut state = GeneratorState::from_seed(42);
//! let generator = ScenarioGenerator::new(WorkerPool::default());
//!
//! let scenario = generator.generate_batch(&mut state, 0).unwrap();
//! assert_eq!(scenario.messages().len(), 6);
//! assert_eq!(scenario.base_interval, 0);
//! ```

pub mod generator;
pub mod seed;

// Re-exports for convenience
pub use generator::{
    build_scenario, GeneratorError, Role, Scenario, ScenarioDraws, ScenarioGenerator, ScriptLine,
    WorkerTriple, MESSAGES_PER_SCENARIO, SCRIPT,
};
pub use seed::{expand_seed, GeneratorState, DEFAULT_SEED};
