//! Error types for tally-core

use thiserror::Error;

use crate::record::RecordKind;

/// Result type alias using tally-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tally-core operations
///
/// The typed merge path never fails; these only surface at the dynamic
/// boundary where records arrive as untyped JSON.
#[derive(Error, Debug)]
pub enum Error {
    /// A candidate does not describe the same kind of record as the baseline
    #[error("Candidate {index} is a {found} record, expected {expected}")]
    KindMismatch {
        expected: RecordKind,
        found: RecordKind,
        index: usize,
    },

    /// Unrecognized record kind name
    #[error("Unknown record kind: {0}")]
    UnknownKind(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
