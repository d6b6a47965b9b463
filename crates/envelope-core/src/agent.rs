//! The pluggable agent-logic seam.
//!
//! Each concrete agent is a separate [`Agent`] implementation behind the
//! same envelope; the envelope never knows what the logic does, only that
//! it produces a serializable result or an [`AgentError`].

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// A domain failure raised by agent logic.
///
/// `kind` is a stable category label suitable for machine inspection
/// (it becomes the `error_type` output field); `message` is the
/// human-readable part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentError {
    kind: String,
    message: String,
}

impl AgentError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AgentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AgentError {}

/// Agent logic behind the envelope.
///
/// The input is whatever JSON value the caller supplied; no schema is
/// imposed here. The output is any serializable structure whose fields are
/// merged into the success envelope. Implementations may write progress
/// text to stderr at any point; stdout belongs to the envelope alone.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Domain result merged into the success envelope.
    type Output: Serialize + Send;

    async fn run(&self, input: Value) -> Result<Self::Output, AgentError>;
}
