use serde_json::{Map, Value};

use super::TranscriptError;

const ASSISTANT: &str = "assistant";

/// One non-blank line of a transcript.
///
/// The line must be a JSON object with a `type` field. `message` stays an
/// opaque value until the record is selected, so user or system lines of any
/// shape never fail the run. Duplicate keys resolve to the last occurrence.
#[derive(Debug)]
pub struct Record {
    pub kind: Value,
    pub message: Value,
}

impl Record {
    /// Parse one line. `line` is the 1-based line number used in errors.
    pub fn parse(text: &str, line: usize) -> Result<Self, TranscriptError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|source| TranscriptError::MalformedLine { line, source })?;
        let mut map = into_object(value).ok_or(TranscriptError::InvalidRecord {
            line,
            reason: "line is not a JSON object",
        })?;
        let kind = map.remove("type").ok_or(TranscriptError::InvalidRecord {
            line,
            reason: "missing `type` field",
        })?;
        let message = map.remove("message").unwrap_or(Value::Null);
        Ok(Record { kind, message })
    }

    /// A non-string `type` is never an assistant tag.
    pub fn is_assistant(&self) -> bool {
        self.kind.as_str() == Some(ASSISTANT)
    }

    /// Take `message.content[0].text`. `line` is only used for error reporting.
    pub fn into_text(self, line: usize) -> Result<String, TranscriptError> {
        let malformed = |reason: &'static str| TranscriptError::MalformedAssistant { line, reason };

        let mut message = into_object(self.message).ok_or(malformed("`message` is not an object"))?;
        let content = match message.remove("content") {
            Some(Value::Array(blocks)) => blocks,
            Some(_) => return Err(malformed("`message.content` is not a list")),
            None => return Err(malformed("`message` has no `content`")),
        };
        let first = content
            .into_iter()
            .next()
            .ok_or(TranscriptError::EmptyContent { line })?;
        let mut block = into_object(first).ok_or(malformed("first content block is not an object"))?;
        match block.remove("text") {
            Some(Value::String(text)) => Ok(text),
            _ => Err(TranscriptError::MissingText { line }),
        }
    }
}

fn into_object(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
