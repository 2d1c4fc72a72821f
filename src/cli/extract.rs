use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::HookError;
use crate::transcript;

/// Print the last assistant message of `transcript` to stdout.
pub fn run(transcript: &Path) -> Result<(), HookError> {
    execute(transcript, std::io::stdout().lock())
}

/// Shared tail of both subcommands: select, then write. Nothing is written
/// unless selection succeeds.
pub(crate) fn execute<W: Write>(transcript: &Path, out: W) -> Result<(), HookError> {
    match transcript::last_assistant_text(transcript)? {
        Some(text) => {
            debug!(chars = text.chars().count(), "writing assistant message");
            super::emit(out, &text).map_err(HookError::Output)
        }
        None => {
            debug!("no assistant message in transcript");
            Ok(())
        }
    }
}
