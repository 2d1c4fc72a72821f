//! Transcript reading and assistant message selection.
//!
//! A transcript is an append-only JSONL log. "Last" means last in file
//! order; embedded timestamps are never consulted.

mod record;

pub use record::Record;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Errors raised while reading a transcript or extracting the message.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TranscriptError {
    #[error("failed to open transcript {}", path.display())]
    #[diagnostic(code(commit_message_hook::transcript::open))]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read transcript line {line}")]
    #[diagnostic(code(commit_message_hook::transcript::read))]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("transcript line {line} is not valid JSON")]
    #[diagnostic(code(commit_message_hook::transcript::malformed_line))]
    MalformedLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("transcript line {line} is not a record: {reason}")]
    #[diagnostic(
        code(commit_message_hook::transcript::invalid_record),
        help("each non-blank line must be a JSON object with a `type` field")
    )]
    InvalidRecord { line: usize, reason: &'static str },
    #[error("assistant record on line {line} is malformed: {reason}")]
    #[diagnostic(code(commit_message_hook::transcript::malformed_assistant))]
    MalformedAssistant { line: usize, reason: &'static str },
    #[error("assistant record on line {line} has empty `message.content`")]
    #[diagnostic(code(commit_message_hook::transcript::empty_content))]
    EmptyContent { line: usize },
    #[error("first content block of the assistant record on line {line} has no string `text`")]
    #[diagnostic(code(commit_message_hook::transcript::missing_text))]
    MissingText { line: usize },
}

/// Text of the last assistant record in the transcript at `path`.
///
/// Returns `Ok(None)` when no record is tagged `assistant`. The file handle
/// lives only for the duration of this call.
pub fn last_assistant_text(path: &Path) -> Result<Option<String>, TranscriptError> {
    let file = File::open(path).map_err(|source| TranscriptError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading transcript");
    last_assistant_text_from_reader(BufReader::new(file))
}

/// Same as [`last_assistant_text`] over any buffered reader.
///
/// Every non-blank line is parsed, so a malformed line fails the run even
/// when a later assistant record would have been selected.
pub fn last_assistant_text_from_reader<R: BufRead>(
    reader: R,
) -> Result<Option<String>, TranscriptError> {
    let mut records = 0usize;
    let mut last: Option<(usize, Record)> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| TranscriptError::Read {
            line: line_no,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record = Record::parse(&line, line_no)?;
        records += 1;
        if record.is_assistant() {
            last = Some((line_no, record));
        }
    }

    debug!(
        records,
        assistant_line = ?last.as_ref().map(|(line, _)| *line),
        "transcript parsed"
    );
    last.map(|(line, record)| record.into_text(line)).transpose()
}
