//! Input loading and the output envelope shape.
//!
//! The input is an opaque, caller-defined JSON value carried in one
//! environment variable. The output is a single JSON object with a
//! `status` field; success carries the domain result's fields, error
//! carries `error` and `error_type`.

use serde_json::{Map, Value, json};

use crate::error::EnvelopeError;

/// Environment variable carrying the JSON input. Name fixed by contract.
pub const INPUT_VAR: &str = "INPUT_DATA";

/// Parse the raw value of [`INPUT_VAR`].
///
/// The caller reads the environment; this function only validates. An
/// unset variable and an empty string are both `InputMissing`, anything
/// that does not parse as JSON is `InputMalformed`. Any valid JSON value
/// is accepted, scalars included.
pub fn load_input(raw: Option<&str>) -> Result<Value, EnvelopeError> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or(EnvelopeError::InputMissing)?;
    serde_json::from_str(raw).map_err(EnvelopeError::InputMalformed)
}

/// The single JSON document written to stdout.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputEnvelope(Value);

impl OutputEnvelope {
    /// Success envelope: `status: "success"` merged with the domain
    /// result's fields.
    ///
    /// A non-object result is carried under a `result` key so the envelope
    /// stays an object. If the result carries its own `status` field the
    /// envelope's value overwrites it; the contract field stays
    /// trustworthy.
    pub fn success(result: Value) -> Self {
        let mut fields = match result {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("result".to_string(), other);
                map
            }
        };
        fields.insert("status".to_string(), Value::String("success".to_string()));
        Self(Value::Object(fields))
    }

    /// Error envelope: `status: "error"` plus the failure's message and
    /// stable category label.
    pub fn error(error: &EnvelopeError) -> Self {
        Self(json!({
            "status": "error",
            "error": error.to_string(),
            "error_type": error.error_type(),
        }))
    }

    pub fn is_success(&self) -> bool {
        self.0.get("status").and_then(Value::as_str) == Some("success")
    }

    /// The `error` field of an error envelope.
    pub fn error_message(&self) -> Option<&str> {
        if self.is_success() {
            return None;
        }
        self.0.get("error").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Pretty-printed JSON text, the only bytes allowed on stdout.
    pub fn render(&self) -> String {
        // A `Value` has string keys throughout; serializing it cannot fail.
        serde_json::to_string_pretty(&self.0).expect("Value serialization")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn unset_input_is_missing() {
        let err = load_input(None).unwrap_err();
        assert!(matches!(err, EnvelopeError::InputMissing));
    }

    #[test]
    fn empty_input_is_missing() {
        let err = load_input(Some("")).unwrap_err();
        assert!(matches!(err, EnvelopeError::InputMissing));
    }

    #[test]
    fn non_json_input_is_malformed() {
        for raw in ["not valid json", "{not json", "{\"a\":}"] {
            let err = load_input(Some(raw)).unwrap_err();
            assert!(matches!(err, EnvelopeError::InputMalformed(_)), "{raw}");
        }
    }

    #[rstest]
    #[case::object(json!({"query": "Hello, world!"}))]
    #[case::array(json!([1, 2, 3]))]
    #[case::string(json!("plain text"))]
    #[case::number(json!(42.5))]
    #[case::boolean(json!(true))]
    #[case::null(json!(null))]
    #[case::nested(json!({"a": {"b": [{"c": null}]}, "d": [[]]}))]
    #[case::unicode(json!({"query": "こんにちは 🤖"}))]
    fn any_valid_json_value_round_trips(#[case] value: Value) {
        let encoded = value.to_string();
        let parsed = load_input(Some(&encoded)).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn success_envelope_merges_result_fields() {
        let env = OutputEnvelope::success(json!({"message": "hi", "n": 3}));
        let v = env.as_value();
        assert_eq!(v["status"], "success");
        assert_eq!(v["message"], "hi");
        assert_eq!(v["n"], 3);
        assert!(env.is_success());
    }

    #[test]
    fn envelope_status_wins_over_result_status() {
        let env = OutputEnvelope::success(json!({"status": "weird"}));
        assert_eq!(env.as_value()["status"], "success");
    }

    #[test]
    fn non_object_result_is_wrapped() {
        let env = OutputEnvelope::success(json!([1, 2]));
        let v = env.as_value();
        assert_eq!(v["status"], "success");
        assert_eq!(v["result"], json!([1, 2]));
    }

    #[test]
    fn error_envelope_shape() {
        let env = OutputEnvelope::error(&EnvelopeError::InputMissing);
        let v = env.as_value();
        assert_eq!(v["status"], "error");
        assert_eq!(v["error_type"], "InputMissing");
        assert!(v["error"].as_str().unwrap().contains("INPUT_DATA"));
        assert!(!env.is_success());
        assert_eq!(env.error_message(), v["error"].as_str());
    }

    #[test]
    fn render_is_one_parseable_document() {
        let env = OutputEnvelope::success(json!({"message": "hi"}));
        let text = env.render();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(&back, env.as_value());
    }
}
