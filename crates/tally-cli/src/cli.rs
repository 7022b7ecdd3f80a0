use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Resolve divergent versions of time tracking records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the CLI config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge a baseline record with candidate versions
    Merge {
        /// Merge request JSON (`{"baseline": .., "candidates": [..]}`), `-` for stdin
        #[arg(value_name = "REQUEST", conflicts_with = "baseline")]
        request: Option<PathBuf>,
        /// Baseline record JSON
        #[arg(long, value_name = "PATH")]
        baseline: Option<PathBuf>,
        /// Candidate record JSON, in arrival order (repeatable)
        #[arg(long = "candidate", value_name = "PATH", requires = "baseline")]
        candidates: Vec<PathBuf>,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Inspect or update the CLI config
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,
    /// Print the effective config as JSON
    Show,
    /// Update config values
    Set {
        /// Pretty-print merge output by default
        #[arg(long, value_name = "BOOL")]
        pretty_output: Option<bool>,
        /// Default tracing filter when `RUST_LOG` is unset
        #[arg(long, value_name = "FILTER")]
        log_filter: Option<String>,
    },
}
