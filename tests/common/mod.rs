// Shared test helpers for integration tests.
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_commit-message-hook"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Runs `commit-message-hook hook` with the given stdin.
/// Returns (stdout, stderr, exit_code).
pub fn run_hook(stdin_input: &str) -> (String, String, i32) {
    run_args(stdin_input, &["hook"])
}

/// Runs the binary with the given stdin and args.
/// Returns (stdout, stderr, exit_code).
pub fn run_args(stdin_input: &str, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::ErrorKind;
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Writes `lines` to a temp transcript, one per line.
pub fn transcript(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp transcript");
    for line in lines {
        writeln!(file, "{line}").expect("failed to write transcript");
    }
    file
}

pub fn payload_for(path: &Path) -> String {
    serde_json::json!({
        "session_id": "sess-e2e-test",
        "transcript_path": "/tmp/main-session.jsonl",
        "cwd": "/tmp/test",
        "hook_event_name": "SubagentStop",
        "stop_hook_active": false,
        "agent_id": "agent-commit",
        "agent_transcript_path": path.to_str().expect("temp path not UTF-8")
    })
    .to_string()
}

pub fn user(text: &str) -> String {
    serde_json::json!({
        "type": "user",
        "message": {"role": "user", "content": text}
    })
    .to_string()
}

pub fn assistant(text: &str) -> String {
    serde_json::json!({
        "type": "assistant",
        "message": {"role": "assistant", "content": [{"type": "text", "text": text}]}
    })
    .to_string()
}
