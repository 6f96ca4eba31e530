//! Error types shared across the worker-chatter crates.

/// Error type for core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A precondition on the run configuration does not hold.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A structured value could not be serialized to a document.
    #[error("Failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    /// Payload bytes are not a valid JSON document.
    #[error("Failed to decode document: {0}")]
    Decode(String),
}

impl CoreError {
    /// Build a decode error from anything displayable.
    pub fn decode(reason: impl std::fmt::Display) -> Self {
        Self::Decode(reason.to_string())
    }
}
