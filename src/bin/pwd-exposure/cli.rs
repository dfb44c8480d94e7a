use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Offline password strength and leak-exposure checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Leaked-password corpus, one password per line
    #[arg(short, long, env = "PWD_CORPUS_PATH")]
    pub corpus: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute (default: check)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Analyze passwords interactively
    ///
    /// Prompts for a password (optionally hidden), prints its strength report,
    /// and repeats until you decline.
    Check,

    /// Explain the terms used in a report
    ///
    /// Example: pwd-exposure learn entropy
    Learn {
        /// Term or prefix to explain; starts an interactive session when omitted
        term: Option<String>,
    },
}
