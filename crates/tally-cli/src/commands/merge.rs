use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tally_core::{AnyRecord, MergeRequest};

use crate::error::CliError;

/// Where the records of a merge come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeInput {
    /// A single request document; `-` reads stdin
    Request(PathBuf),
    /// Separate baseline and candidate files
    Files {
        baseline: PathBuf,
        candidates: Vec<PathBuf>,
    },
}

impl MergeInput {
    pub fn from_args(
        request: Option<PathBuf>,
        baseline: Option<PathBuf>,
        candidates: Vec<PathBuf>,
    ) -> Result<Self, CliError> {
        match (request, baseline) {
            (Some(request), _) => Ok(Self::Request(request)),
            (None, Some(baseline)) => Ok(Self::Files {
                baseline,
                candidates,
            }),
            (None, None) => Err(CliError::MissingInput),
        }
    }
}

pub fn run_merge(input: &MergeInput, output_path: Option<&Path>, pretty: bool) -> Result<(), CliError> {
    let request = load_request(input)?;
    tracing::info!(
        kind = %request.baseline.kind(),
        candidates = request.candidates.len(),
        "Merging record"
    );

    let resolved = request.resolve()?;
    let rendered = render_record(&resolved, pretty)?;

    if let Some(path) = output_path {
        std::fs::write(path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}

pub fn load_request(input: &MergeInput) -> Result<MergeRequest, CliError> {
    match input {
        MergeInput::Request(path) => {
            let raw = read_input(path)?;
            MergeRequest::from_json(&raw).map_err(|error| match error {
                tally_core::Error::Serialization(source) => CliError::InvalidRecord {
                    path: path.clone(),
                    source,
                },
                other => CliError::Core(other),
            })
        }
        MergeInput::Files {
            baseline,
            candidates,
        } => Ok(MergeRequest {
            baseline: read_record(baseline)?,
            candidates: candidates
                .iter()
                .map(|path| read_record(path))
                .collect::<Result<Vec<_>, _>>()?,
        }),
    }
}

pub fn render_record(record: &AnyRecord, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    }
}

fn read_record(path: &Path) -> Result<AnyRecord, CliError> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).map_err(|source| CliError::InvalidRecord {
        path: path.to_path_buf(),
        source,
    })
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
