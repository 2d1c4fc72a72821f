use std::io::{Read, Write};

use tracing::debug;

use crate::error::HookError;
use crate::protocol::HookInput;

/// Execute the hook against the process's stdin and stdout.
pub fn run() -> Result<(), HookError> {
    execute(std::io::stdin().lock(), std::io::stdout().lock())
}

pub(crate) fn execute<R: Read, W: Write>(mut input: R, out: W) -> Result<(), HookError> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw).map_err(HookError::Stdin)?;
    debug!(bytes = raw.len(), "read hook payload");

    let hook_input = HookInput::from_slice(&raw)?;
    let path = hook_input.transcript_path()?;
    debug!(
        path = %path.display(),
        session_id = ?hook_input.session_id,
        agent_id = ?hook_input.agent_id,
        "agent transcript path"
    );

    super::extract::execute(path, out)
}
