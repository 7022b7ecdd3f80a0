use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::{normalize_text_option, CliConfig};
use crate::error::CliError;

pub fn run_config(
    command: ConfigCommands,
    config_path: Option<&Path>,
    config: CliConfig,
) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => {
            let path = config_path.ok_or_else(no_config_dir)?;
            println!("{}", path.display());
        }
        ConfigCommands::Show => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommands::Set {
            pretty_output,
            log_filter,
        } => {
            let path = config_path.ok_or_else(no_config_dir)?;
            let updated = apply_config_update(config, pretty_output, log_filter);
            updated.save_to_path(path).map_err(CliError::Config)?;
            tracing::info!(path = %path.display(), "Saved CLI config");
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Apply `config set` flags. An empty filter clears the stored filter.
pub fn apply_config_update(
    mut config: CliConfig,
    pretty_output: Option<bool>,
    log_filter: Option<String>,
) -> CliConfig {
    if let Some(pretty_output) = pretty_output {
        config.pretty_output = pretty_output;
    }
    if let Some(log_filter) = log_filter {
        config.log_filter = normalize_text_option(Some(log_filter));
    }
    config
}

fn no_config_dir() -> CliError {
    CliError::Config("Could not resolve a config directory; pass --config PATH".to_string())
}
