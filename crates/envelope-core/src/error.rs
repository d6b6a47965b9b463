use thiserror::Error;

use crate::agent::AgentError;

/// Everything that can go wrong during one invocation.
///
/// Every variant maps to a stable `error_type` label so the backend can
/// classify failures without parsing message text.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("INPUT_DATA environment variable is required")]
    InputMissing,

    #[error("invalid JSON in INPUT_DATA: {0}")]
    InputMalformed(#[source] serde_json::Error),

    #[error("{0}")]
    Agent(#[from] AgentError),

    #[error("agent result is not JSON-serializable: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl EnvelopeError {
    /// Stable category label for the `error_type` output field.
    ///
    /// Domain failures carry their own kind; the other variants use fixed
    /// names that callers may match on.
    pub fn error_type(&self) -> &str {
        match self {
            Self::InputMissing => "InputMissing",
            Self::InputMalformed(_) => "InputMalformed",
            Self::Agent(e) => e.kind(),
            Self::Serialize(_) => "SerializationFailed",
        }
    }
}
