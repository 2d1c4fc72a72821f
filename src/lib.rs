pub mod error;
pub mod protocol;
pub mod transcript;

pub(crate) mod cli;

pub use error::HookError;

/// Run the hook: read the payload from stdin, print the last assistant message.
///
/// Never exits the process. Callers check
/// [`HookError::contract_message`] to tell caller-facing failures (bad JSON,
/// missing `agent_transcript_path`) from internal ones.
pub fn run_hook() -> Result<(), HookError> {
    cli::hook::run()
}

/// Run the `extract` subcommand against a transcript path given directly.
pub fn run_extract(transcript: &std::path::Path) -> Result<(), HookError> {
    cli::extract::run(transcript)
}
