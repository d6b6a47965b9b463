//! Drives one invocation: load input, run agent logic, emit the result.
//!
//! Strictly linear, single-shot. The two outcomes here are the only two
//! ways a conforming process terminates; external kills (timeout, resource
//! limits) are the sandbox's business, not ours.

use serde_json::Value;

use crate::agent::Agent;
use crate::envelope::{OutputEnvelope, load_input};
use crate::error::EnvelopeError;

/// The envelope to print and the exit code to terminate with.
///
/// Invariant: `exit_code == 0` iff the envelope says `status: "success"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub envelope: OutputEnvelope,
    pub exit_code: i32,
}

impl Completion {
    fn succeeded(envelope: OutputEnvelope) -> Self {
        Self {
            envelope,
            exit_code: 0,
        }
    }

    fn failed(error: &EnvelopeError) -> Self {
        Self {
            envelope: OutputEnvelope::error(error),
            exit_code: 1,
        }
    }
}

/// Run one agent invocation end to end.
///
/// `raw_input` is the raw value of the input variable as read by the
/// caller (`None` when unset). Every failure, wherever it originates, is
/// converted right here into the error envelope: the caller always gets
/// exactly one well-formed envelope and a matching exit code, never a
/// propagated error.
pub async fn run_envelope<A: Agent>(agent: &A, raw_input: Option<&str>) -> Completion {
    match invoke(agent, raw_input).await {
        Ok(result) => Completion::succeeded(OutputEnvelope::success(result)),
        Err(e) => Completion::failed(&e),
    }
}

async fn invoke<A: Agent>(agent: &A, raw_input: Option<&str>) -> Result<Value, EnvelopeError> {
    let input = load_input(raw_input)?;
    let output = agent.run(input).await?;
    serde_json::to_value(output).map_err(EnvelopeError::Serialize)
}
