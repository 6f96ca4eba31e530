//! Message populator: generates scenarios and stores their messages.

use crate::error::SqlitePopulatorError;
use crate::store::MessageStore;
use chatter_core::Document;
use chatter_generator::{GeneratorState, ScenarioGenerator, MESSAGES_PER_SCENARIO};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Number of scenarios written by a full run.
pub const BATCH_COUNT: u64 = 10;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of scenarios generated.
    pub batch_count: u64,
    /// Number of messages generated.
    pub messages_generated: u64,
    /// Number of messages inserted.
    pub messages_inserted: u64,
    /// Number of messages skipped after an encode or insert failure.
    pub messages_skipped: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent encoding and inserting data.
    pub insert_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate inserted messages per second.
    pub fn messages_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.messages_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Encode and insert the messages of one batch.
///
/// A message that fails to encode or insert is logged with its batch index
/// and position and skipped; the remaining messages are still attempted.
pub fn insert_messages<S, T>(
    store: &mut S,
    batch_index: u64,
    messages: &[T],
    metrics: &mut PopulateMetrics,
) where
    S: MessageStore + ?Sized,
    T: Serialize,
{
    for (position, message) in messages.iter().enumerate() {
        let document = match Document::from_value(message) {
            Ok(document) => document,
            Err(e) => {
                error!(
                    "Error encoding message (batch {}, position {}): {}",
                    batch_index, position, e
                );
                metrics.messages_skipped += 1;
                continue;
            }
        };

        match store.insert(&document) {
            Ok(id) => {
                debug!(
                    "Inserted message (batch {}, position {}) as id {}",
                    batch_index, position, id
                );
                metrics.messages_inserted += 1;
            }
            Err(e) => {
                error!(
                    "Error inserting message (batch {}, position {}): {}",
                    batch_index, position, e
                );
                metrics.messages_skipped += 1;
            }
        }
    }
}

/// Populator that generates scenarios and writes them to a store.
///
/// The populator owns the generator state; batches are generated and
/// inserted strictly in increasing index order.
pub struct MessagePopulator<S: MessageStore> {
    store: S,
    generator: ScenarioGenerator,
    state: GeneratorState,
    batch_index: u64,
}

impl<S: MessageStore> MessagePopulator<S> {
    /// Create a new populator over `store`.
    ///
    /// # Arguments
    ///
    /// * `store` - Destination for encoded messages
    /// * `seed` - Random seed for deterministic generation
    pub fn new(store: S, seed: u64) -> Self {
        Self {
            store,
            generator: ScenarioGenerator::default(),
            state: GeneratorState::from_seed(seed),
            batch_index: 0,
        }
    }

    /// Use a different scenario generator.
    pub fn with_generator(mut self, generator: ScenarioGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Get the index of the next batch to generate.
    pub fn current_batch(&self) -> u64 {
        self.batch_index
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Create the record table.
    pub fn create_schema(&mut self) -> Result<(), SqlitePopulatorError> {
        self.store.create_schema()
    }

    /// Generate and store `batch_count` scenarios.
    ///
    /// Per-message failures are counted in the returned metrics and do not
    /// stop the run.
    pub fn populate(&mut self, batch_count: u64) -> Result<PopulateMetrics, SqlitePopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        info!(
            "Populating {} batches of {} messages (seed={})",
            batch_count,
            MESSAGES_PER_SCENARIO,
            self.state.seed()
        );

        let mut generation_time = Duration::ZERO;
        let mut insert_time = Duration::ZERO;

        for _ in 0..batch_count {
            let batch_index = self.batch_index;

            let gen_start = Instant::now();
            let scenario = self
                .generator
                .generate_batch(&mut self.state, batch_index)?;
            generation_time += gen_start.elapsed();

            let insert_start = Instant::now();
            insert_messages(
                &mut self.store,
                batch_index,
                scenario.messages(),
                &mut metrics,
            );
            insert_time += insert_start.elapsed();

            metrics.batch_count += 1;
            metrics.messages_generated += scenario.messages().len() as u64;
            self.batch_index += 1;

            debug!(
                "Batch {} complete: workers ({}, {}, {}), base interval {}",
                batch_index,
                scenario.workers.a,
                scenario.workers.b,
                scenario.workers.c,
                scenario.base_interval
            );
        }

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.insert_duration = insert_time;

        info!(
            "Population complete: {} messages inserted, {} skipped in {:?} ({:.2} messages/sec)",
            metrics.messages_inserted,
            metrics.messages_skipped,
            metrics.total_duration,
            metrics.messages_per_second()
        );

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;
    use chatter_core::{Message, WorkerId};
    use serde::ser::Error as _;
    use serde::Serializer;

    /// In-memory store that can be told to reject specific inserts.
    #[derive(Default)]
    struct RecordingStore {
        documents: Vec<Document>,
        attempts: usize,
        fail_on_attempt: Option<usize>,
    }

    impl MessageStore for RecordingStore {
        fn create_schema(&mut self) -> Result<(), SqlitePopulatorError> {
            Ok(())
        }

        fn insert(&mut self, payload: &Document) -> Result<i64, SqlitePopulatorError> {
            let attempt = self.attempts;
            self.attempts += 1;
            if self.fail_on_attempt == Some(attempt) {
                return Err(SqlitePopulatorError::Sqlite(
                    rusqlite::Error::InvalidQuery,
                ));
            }
            self.documents.push(payload.clone());
            Ok(self.documents.len() as i64)
        }

        fn query(&self) -> Result<Vec<Document>, SqlitePopulatorError> {
            Ok(self.documents.clone())
        }
    }

    /// A message that may refuse to serialize.
    enum Outgoing {
        Valid(Message),
        Broken,
    }

    impl Serialize for Outgoing {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Outgoing::Valid(message) => message.serialize(serializer),
                Outgoing::Broken => Err(S::Error::custom("unserializable message")),
            }
        }
    }

    fn message(n: u32) -> Message {
        Message::new(WorkerId::new(1), format!("message {n}"), n as u64, WorkerId::new(2))
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            messages_inserted: 60,
            total_duration: Duration::from_secs(2),
            ..Default::default()
        };
        assert_eq!(metrics.messages_per_second(), 30.0);
        assert_eq!(PopulateMetrics::default().messages_per_second(), 0.0);
    }

    #[test]
    fn test_encode_failure_skips_only_that_message() {
        let batch: Vec<Outgoing> = (1..=6)
            .map(|n| {
                if n == 3 {
                    Outgoing::Broken
                } else {
                    Outgoing::Valid(message(n))
                }
            })
            .collect();

        let mut store = RecordingStore::default();
        let mut metrics = PopulateMetrics::default();
        insert_messages(&mut store, 0, &batch, &mut metrics);

        assert_eq!(metrics.messages_inserted, 5);
        assert_eq!(metrics.messages_skipped, 1);

        let stored: Vec<Message> = store
            .query()
            .unwrap()
            .iter()
            .map(|doc| doc.to_value().unwrap())
            .collect();
        assert_eq!(
            stored,
            vec![message(1), message(2), message(4), message(5), message(6)]
        );
    }

    #[test]
    fn test_insert_failure_skips_only_that_message() {
        let batch: Vec<Message> = (1..=6).map(message).collect();

        let mut store = RecordingStore {
            fail_on_attempt: Some(2),
            ..Default::default()
        };
        let mut metrics = PopulateMetrics::default();
        insert_messages(&mut store, 3, &batch, &mut metrics);

        assert_eq!(store.attempts, 6);
        assert_eq!(metrics.messages_inserted, 5);
        assert_eq!(metrics.messages_skipped, 1);
        assert_eq!(store.documents.len(), 5);
    }

    #[test]
    fn test_populate_full_run() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut populator = MessagePopulator::new(store, 42);
        populator.create_schema().unwrap();

        let metrics = populator.populate(BATCH_COUNT).unwrap();
        assert_eq!(metrics.batch_count, 10);
        assert_eq!(metrics.messages_generated, 60);
        assert_eq!(metrics.messages_inserted, 60);
        assert_eq!(metrics.messages_skipped, 0);
        assert_eq!(populator.current_batch(), 10);

        let store = populator.into_store();
        assert_eq!(store.row_count().unwrap(), 60);

        let messages: Vec<Message> = store
            .query()
            .unwrap()
            .iter()
            .map(|doc| doc.to_value().unwrap())
            .collect();
        for message in &messages {
            assert_ne!(message.worker, message.destination_worker);
            assert!((1..=5).contains(&message.worker.get()));
            assert!((1..=5).contains(&message.destination_worker.get()));
        }
    }

    #[test]
    fn test_populate_is_deterministic() {
        let run = |seed: u64| {
            let mut populator = MessagePopulator::new(RecordingStore::default(), seed);
            populator.populate(BATCH_COUNT).unwrap();
            populator.into_store().documents
        };

        assert_eq!(run(7), run(7));
        assert_ne!(run(7), run(8));
    }

    #[test]
    fn test_populate_matches_generator() {
        let mut populator = MessagePopulator::new(RecordingStore::default(), 11);
        populator.populate(3).unwrap();
        let stored = populator.into_store().documents;

        let generator = ScenarioGenerator::default();
        let mut state = GeneratorState::from_seed(11);
        let expected: Vec<Document> = (0..3)
            .flat_map(|batch| {
                generator
                    .generate_batch(&mut state, batch)
                    .unwrap()
                    .into_messages()
            })
            .map(|message| Document::from_value(&message).unwrap())
            .collect();

        assert_eq!(stored, expected);
    }

    #[test]
    fn test_populate_continues_after_insert_failure() {
        let store = RecordingStore {
            fail_on_attempt: Some(8),
            ..Default::default()
        };
        let mut populator = MessagePopulator::new(store, 5);

        let metrics = populator.populate(2).unwrap();
        assert_eq!(metrics.messages_generated, 12);
        assert_eq!(metrics.messages_inserted, 11);
        assert_eq!(metrics.messages_skipped, 1);
    }
}
