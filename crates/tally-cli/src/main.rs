//! Tally CLI - reproduce record merges from the command line
//!
//! Feeds JSON record snapshots into the merge engine and prints the
//! resolved record.

mod cli;
mod commands;
mod config;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::merge::{run_merge, MergeInput};
use crate::config::CliConfig;
use crate::error::CliError;

const DEFAULT_LOG_FILTER: &str = "tally=info";

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().or_else(config::default_config_path);
    let config = match &config_path {
        Some(path) => CliConfig::load_from_path(path).map_err(CliError::Config)?,
        None => CliConfig::default(),
    };

    init_tracing(&config);
    tracing::debug!(config_path = ?config_path, "Loaded CLI config");

    match cli.command {
        Commands::Merge {
            request,
            baseline,
            candidates,
            output,
            compact,
        } => {
            let input = MergeInput::from_args(request, baseline, candidates)?;
            let pretty = config.pretty_output() && !compact;
            run_merge(&input, output.as_deref(), pretty)
        }
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref()),
        Commands::Config { command } => run_config(command, config_path.as_deref(), config),
    }
}

fn init_tracing(config: &CliConfig) {
    let fallback = config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
