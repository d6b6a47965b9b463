//! Example echo agent behind the runtime envelope.
//!
//! Run it the way the backend would:
//!
//! ```text
//! INPUT_DATA='{"query": "Hello, world!"}' envelope-cli
//! ```
//!
//! Everything process-global lives here: the environment read, the two
//! standard streams, and the exit call. The envelope itself (and the agent
//! logic) sees only values.

use std::io::Write;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use envelope_core::{Agent, AgentError, INPUT_VAR, run_envelope};

#[derive(Debug, Serialize)]
struct EchoOutput {
    message: String,
    input_received: Value,
    agent_version: &'static str,
}

/// Echoes the input back with a greeting. Replace this with real agent
/// logic; the envelope stays the same.
struct EchoAgent;

#[async_trait]
impl Agent for EchoAgent {
    type Output = EchoOutput;

    async fn run(&self, input: Value) -> Result<EchoOutput, AgentError> {
        // Progress narrative goes to stderr; the backend never parses it.
        eprintln!("🤖 Agent started with input: {input}");

        let query = input
            .get("query")
            .and_then(Value::as_str)
            .unwrap_or("No query provided");
        let message = format!("Hello! You said: {query}");

        Ok(EchoOutput {
            message,
            input_received: input,
            agent_version: "1.0.0",
        })
    }
}

#[tokio::main]
async fn main() {
    let raw = std::env::var(INPUT_VAR).ok();
    let completion = run_envelope(&EchoAgent, raw.as_deref()).await;

    if completion.envelope.is_success() {
        eprintln!("✅ Agent completed successfully");
    } else {
        let reason = completion.envelope.error_message().unwrap_or("unknown");
        eprintln!("❌ Agent failed: {reason}");
    }

    // The envelope must reach the backend before we exit.
    println!("{}", completion.envelope.render());
    let _ = std::io::stdout().flush();

    std::process::exit(completion.exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn echoes_the_query_back() {
        let input = json!({"query": "Hello, world!"});
        let c = run_envelope(&EchoAgent, Some(&input.to_string())).await;

        assert_eq!(c.exit_code, 0);
        let v = c.envelope.as_value();
        assert_eq!(v["status"], "success");
        assert!(v["message"].as_str().unwrap().contains("Hello, world!"));
        assert_eq!(v["input_received"], input);
        assert_eq!(v["agent_version"], "1.0.0");
    }

    #[tokio::test]
    async fn missing_query_gets_the_default_greeting() {
        let c = run_envelope(&EchoAgent, Some(r#"{"other": 1}"#)).await;

        assert_eq!(c.exit_code, 0);
        let v = c.envelope.as_value();
        assert_eq!(v["message"], "Hello! You said: No query provided");
    }

    #[tokio::test]
    async fn non_object_input_still_echoes() {
        let c = run_envelope(&EchoAgent, Some("[1, 2, 3]")).await;

        assert_eq!(c.exit_code, 0);
        let v = c.envelope.as_value();
        assert_eq!(v["input_received"], json!([1, 2, 3]));
        assert_eq!(v["message"], "Hello! You said: No query provided");
    }
}
