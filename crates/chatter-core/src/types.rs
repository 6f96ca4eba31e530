//! Worker identifiers and the message record.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of workers in the simulated pool.
pub const DEFAULT_POOL_SIZE: u32 = 5;

/// Smallest pool that can host a three-party scenario.
pub const MIN_POOL_SIZE: u32 = 3;

/// Identifier of a simulated worker, in `[1, N]` for a pool of size N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(u32);

impl WorkerId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of workers `[1..N]` messages are exchanged between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    size: u32,
}

impl WorkerPool {
    /// Create a pool of `size` workers.
    ///
    /// Fails with [`CoreError::Configuration`] when the pool cannot provide
    /// three distinct workers.
    pub fn new(size: u32) -> Result<Self, CoreError> {
        if size < MIN_POOL_SIZE {
            return Err(CoreError::Configuration(format!(
                "worker pool needs at least {MIN_POOL_SIZE} members, got {size}"
            )));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn contains(&self, worker: WorkerId) -> bool {
        (1..=self.size).contains(&worker.get())
    }

    /// All worker ids in ascending order.
    pub fn workers(&self) -> Vec<WorkerId> {
        (1..=self.size).map(WorkerId::new).collect()
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self {
            size: DEFAULT_POOL_SIZE,
        }
    }
}

/// A single message sent from one worker to another.
///
/// Serializes to the stored document shape
/// `{worker, message, interval, destination_worker}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sending worker
    pub worker: WorkerId,

    /// Message text
    #[serde(rename = "message")]
    pub text: String,

    /// Elapsed-time offset from the start of the run
    pub interval: u64,

    /// Receiving worker
    pub destination_worker: WorkerId,
}

impl Message {
    pub fn new(
        worker: WorkerId,
        text: impl Into<String>,
        interval: u64,
        destination_worker: WorkerId,
    ) -> Self {
        Self {
            worker,
            text: text.into(),
            interval,
            destination_worker,
        }
    }
}
