use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

/// Print the last assistant message of a `/commit` subagent transcript.
#[derive(Debug, Parser)]
#[command(name = "commit-message-hook", version, about)]
struct Cli {
    /// Log pipeline steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run as a Claude Code SubagentStop hook (reads stdin, writes stdout). The default.
    Hook,
    /// Print the last assistant message of a transcript file
    Extract {
        /// Path to the JSONL transcript
        transcript: PathBuf,
    },
}

fn main() -> miette::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .init();
    }

    let result = match cli.command.unwrap_or(Commands::Hook) {
        Commands::Hook => commit_message_hook::run_hook(),
        Commands::Extract { transcript } => commit_message_hook::run_extract(&transcript),
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Exit code 1 shows stderr to the user without passing it back to the agent.
        Err(e) => match e.contract_message() {
            Some(message) => {
                eprintln!("{message}");
                Ok(ExitCode::FAILURE)
            }
            None => Err(e.into()),
        },
    }
}
