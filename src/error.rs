use crate::transcript::TranscriptError;

/// Everything that can end a hook run unsuccessfully.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HookError {
    #[error("failed to read stdin")]
    #[diagnostic(code(commit_message_hook::stdin))]
    Stdin(#[source] std::io::Error),
    #[error("invalid JSON input: {0}")]
    #[diagnostic(code(commit_message_hook::invalid_input))]
    InvalidInput(serde_json::Error),
    #[error("key 'agent_transcript_path' not found in JSON input.")]
    #[diagnostic(code(commit_message_hook::missing_transcript_path))]
    MissingTranscriptPath,
    #[error("unexpected hook payload: {0}")]
    #[diagnostic(code(commit_message_hook::unexpected_payload))]
    UnexpectedPayload(String),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Transcript(#[from] TranscriptError),
    #[error("failed to write to stdout")]
    #[diagnostic(code(commit_message_hook::output))]
    Output(#[source] std::io::Error),
}

impl HookError {
    /// Malformed stdin JSON or a missing transcript path. The caller broke
    /// the hook contract, as opposed to the data having an unexpected shape.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            HookError::InvalidInput(_) | HookError::MissingTranscriptPath
        )
    }

    /// The one-line `error:` message printed for contract violations.
    ///
    /// `None` for internal failures, which are rendered as full diagnostics.
    pub fn contract_message(&self) -> Option<String> {
        self.is_contract_violation().then(|| format!("error: {self}"))
    }
}
