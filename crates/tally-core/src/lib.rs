//! tally-core - Core library for Tally
//!
//! This crate contains the record models and the merge engine that
//! reconciles divergent versions of the same record coming from local edits
//! and server pushes. It performs no I/O; callers load the baseline and
//! candidates, run the merge, and persist the result.

pub mod error;
pub mod merge;
pub mod models;
pub mod record;
pub mod time;

pub use error::{Error, Result};
pub use merge::{MergeContext, MergeEngine, Mergeable};
pub use record::{merge_records, AnyRecord, MergeRequest, RecordKind};
