pub mod extract;
pub mod hook;

use std::io::Write;

/// Write `text` verbatim, no trailing newline, and flush before returning.
pub(crate) fn emit<W: Write>(mut out: W, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}
