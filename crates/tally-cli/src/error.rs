use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] tally_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid record in {}: {source}", path.display())]
    InvalidRecord {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Nothing to merge. Pass a request file or --baseline with --candidate files.")]
    MissingInput,
    #[error("Configuration error: {0}")]
    Config(String),
}
