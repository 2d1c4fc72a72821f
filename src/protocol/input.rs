use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::HookError;

/// The payload Claude Code sends on stdin when the `/commit` subagent stops.
///
/// `agent_transcript_path` is kept as a raw value so that falsy values
/// (`null`, `""`, `false`, `0`, empty containers) can be told apart from a
/// path of the wrong type. The metadata fields are informational only: a
/// non-string value reads as `None` rather than failing the run. Unknown
/// fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    agent_transcript_path: Option<Value>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub hook_event_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub agent_id: Option<String>,
}

impl HookInput {
    /// Parse the raw stdin bytes.
    pub fn from_slice(raw: &[u8]) -> Result<Self, HookError> {
        let value: Value = serde_json::from_slice(raw).map_err(HookError::InvalidInput)?;
        Self::from_value(value)
    }

    /// Build from an already parsed document. Anything but an object is rejected.
    pub fn from_value(value: Value) -> Result<Self, HookError> {
        if !value.is_object() {
            return Err(HookError::UnexpectedPayload(format!(
                "payload must be a JSON object, got {value}"
            )));
        }
        serde_json::from_value(value).map_err(|e| HookError::UnexpectedPayload(e.to_string()))
    }

    /// The transcript path, returned unchanged. Not checked for existence.
    pub fn transcript_path(&self) -> Result<&Path, HookError> {
        match &self.agent_transcript_path {
            Some(Value::String(path)) if !path.is_empty() => Ok(Path::new(path)),
            None => Err(HookError::MissingTranscriptPath),
            Some(value) if is_falsy(value) => Err(HookError::MissingTranscriptPath),
            Some(value) => Err(HookError::UnexpectedPayload(format!(
                "'agent_transcript_path' must be a string, got {value}"
            ))),
        }
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
