//! envelope-core
//!
//! Execution contract for a short-lived, sandboxed agent process. The
//! hosting backend starts the process with one JSON-encoded input in the
//! `INPUT_DATA` environment variable and captures exactly one JSON document
//! from stdout plus an exit code: 0 when the document says
//! `"status": "success"`, 1 when it says `"status": "error"`. Anything the
//! agent prints to stderr is log narrative and is never parsed.
//!
//! # Modules
//! - **agent**: the pluggable agent-logic seam ([`Agent`], [`AgentError`])
//! - **envelope**: input loading and the output envelope shape
//! - **runtime**: drives one invocation and converts every failure into
//!   the error envelope
//!
//! The library never touches process globals: the binary reads the
//! environment, passes the raw value in, and owns stdout/stderr and the
//! exit call. That keeps every piece testable without process fixtures.

pub mod agent;
pub mod envelope;
pub mod error;
pub mod runtime;

pub use agent::{Agent, AgentError};
pub use envelope::{INPUT_VAR, OutputEnvelope, load_input};
pub use error::EnvelopeError;
pub use runtime::{Completion, run_envelope};
