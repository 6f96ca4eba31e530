//! Scenario generation from a shared generator state.

use chatter_core::{CoreError, Message, WorkerId, WorkerPool};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of messages in every scenario.
pub const MESSAGES_PER_SCENARIO: usize = 6;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The worker pool cannot host a scenario
    #[error("Configuration error: {0}")]
    Configuration(#[from] CoreError),

    /// Intervals for this batch do not fit in a u64
    #[error("Interval overflow at batch {batch_index}")]
    IntervalOverflow { batch_index: u64 },
}

/// Position of a worker in a scenario's triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    A,
    B,
    C,
}

/// One line of the fixed conversation script.
#[derive(Debug, Clone, Copy)]
pub struct ScriptLine {
    pub sender: Role,
    pub recipient: Role,
    /// Indices of the deltas summed into this message's interval
    pub depends_on: &'static [usize],
    /// Message text; `{}` is replaced by the id of `mention`
    pub text: &'static str,
    pub mention: Option<Role>,
}

/// The conversation every scenario follows.
///
/// A and B reply to each other directly while a second thread runs through
/// C, so the interval of a message only accumulates the deltas on its own
/// thread: message 4 skips delta 2 and message 6 skips delta 3.
pub const SCRIPT: [ScriptLine; MESSAGES_PER_SCENARIO] = [
    ScriptLine {
        sender: Role::A,
        recipient: Role::B,
        depends_on: &[0],
        text: "Olá, como vai?",
        mention: None,
    },
    ScriptLine {
        sender: Role::B,
        recipient: Role::A,
        depends_on: &[0, 1],
        text: "Vou bem, e você? Pode falar com o worker {}?",
        mention: Some(Role::C),
    },
    ScriptLine {
        sender: Role::A,
        recipient: Role::C,
        depends_on: &[0, 1, 2],
        text: "Olá, como vai? A worker {} pediu para falar contigo.",
        mention: Some(Role::B),
    },
    ScriptLine {
        sender: Role::A,
        recipient: Role::B,
        depends_on: &[0, 1, 3],
        text: "De novo! Vou bem, obrigada!",
        mention: None,
    },
    ScriptLine {
        sender: Role::C,
        recipient: Role::A,
        depends_on: &[0, 1, 2, 4],
        text: "Vou bem, obrigado! O que ela quer?",
        mention: None,
    },
    ScriptLine {
        sender: Role::A,
        recipient: Role::C,
        depends_on: &[0, 1, 2, 4, 5],
        text: "Não sei. Pergunte para ela, meu chapa.",
        mention: None,
    },
];

/// Three pairwise distinct workers taking part in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerTriple {
    pub a: WorkerId,
    pub b: WorkerId,
    pub c: WorkerId,
}

impl WorkerTriple {
    pub fn get(&self, role: Role) -> WorkerId {
        match role {
            Role::A => self.a,
            Role::B => self.b,
            Role::C => self.c,
        }
    }
}

/// Every random value a scenario consumes, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioDraws {
    /// Multiplier of the batch index, in `[1, 3]`
    pub multiplier: u64,
    pub workers: WorkerTriple,
    /// Per-message increments, each in `[1, 2]`
    pub deltas: [u64; MESSAGES_PER_SCENARIO],
}

/// One generated conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub batch_index: u64,
    pub base_interval: u64,
    pub workers: WorkerTriple,
    messages: Vec<Message>,
}

impl Scenario {
    /// Messages in generation order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

/// Build a scenario from already drawn values.
///
/// Fails with [`GeneratorError::IntervalOverflow`] when the batch index is
/// too large for its intervals to be represented.
pub fn build_scenario(
    batch_index: u64,
    draws: &ScenarioDraws,
) -> Result<Scenario, GeneratorError> {
    let overflow = || GeneratorError::IntervalOverflow { batch_index };
    let base_interval = draws
        .multiplier
        .checked_mul(batch_index)
        .ok_or_else(overflow)?;
    let workers = draws.workers;

    let messages = SCRIPT
        .iter()
        .map(|line| {
            let interval = line
                .depends_on
                .iter()
                .try_fold(base_interval, |acc, &i| acc.checked_add(draws.deltas[i]))
                .ok_or_else(overflow)?;
            let text = match line.mention {
                Some(role) => line.text.replacen("{}", &workers.get(role).to_string(), 1),
                None => line.text.to_string(),
            };
            Ok(Message::new(
                workers.get(line.sender),
                text,
                interval,
                workers.get(line.recipient),
            ))
        })
        .collect::<Result<Vec<_>, GeneratorError>>()?;

    Ok(Scenario {
        batch_index,
        base_interval,
        workers,
        messages,
    })
}

/// Generates scenarios for a fixed worker pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioGenerator {
    pool: WorkerPool,
}

impl ScenarioGenerator {
    pub fn new(pool: WorkerPool) -> Self {
        Self { pool }
    }

    /// Create a generator for a pool of `size` workers.
    pub fn with_pool_size(size: u32) -> Result<Self, GeneratorError> {
        Ok(Self::new(WorkerPool::new(size)?))
    }

    pub fn pool(&self) -> WorkerPool {
        self.pool
    }

    /// Make this scenario's draws, in order: the base interval multiplier,
    /// a permutation of the pool, then the six deltas.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> ScenarioDraws {
        let multiplier = rng.gen_range(1..=3u64);

        let mut permutation = self.pool.workers();
        permutation.shuffle(rng);
        let workers = WorkerTriple {
            a: permutation[0],
            b: permutation[1],
            c: permutation[2],
        };

        let mut deltas = [0u64; MESSAGES_PER_SCENARIO];
        for delta in deltas.iter_mut() {
            *delta = rng.gen_range(1..=2u64);
        }

        ScenarioDraws {
            multiplier,
            workers,
            deltas,
        }
    }

    /// Generate the scenario for `batch_index`.
    ///
    /// The draws are consumed even when building the scenario fails.
    pub fn generate_batch<R: Rng>(
        &self,
        rng: &mut R,
        batch_index: u64,
    ) -> Result<Scenario, GeneratorError> {
        let draws = self.draw(rng);
        build_scenario(batch_index, &draws)
    }
}
