use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Show a live texcount word count for a LaTeX document.
#[derive(Debug, Parser)]
#[command(name = "tex-wordcount", version)]
pub struct Cli {
    /// Document to count.
    pub file: PathBuf,

    /// Status template, e.g. "${words} words, ${math} math".
    #[arg(long)]
    pub template: Option<String>,

    /// texcount executable.
    #[arg(long)]
    pub command: Option<String>,

    /// Extra argument for texcount. Repeat for several.
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Count included files together with the document.
    #[arg(long)]
    pub merge: bool,

    /// Configuration file (RON). Defaults to .tex-wordcount.ron next to the document.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Language id of the document; guessed from the extension when omitted.
    #[arg(long, value_name = "ID")]
    pub language: Option<String>,

    /// Seconds to wait for texcount.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Keep running and recount whenever the file changes.
    #[arg(long)]
    pub watch: bool,

    /// Poll interval for --watch in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 500)]
    pub interval: u64,

    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    /// Log debug output, including texcount arguments.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Write to ./tex-wordcount.log in the current directory.
    File,
    /// Write to the terminal (stderr).
    Terminal,
    /// Write to both file and terminal.
    Both,
}
