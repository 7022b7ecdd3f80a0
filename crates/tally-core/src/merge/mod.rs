//! Merge engine
//!
//! Reconciles one baseline record with any number of candidate versions of
//! the same record. Each field resolves to the first candidate (in arrival
//! order) that changed it from the baseline; relational keys of hierarchical
//! records are copied together from a single record so the merged chain was
//! actually observed somewhere.

mod context;
mod engine;
mod entities;

pub use context::MergeContext;
pub use engine::MergeEngine;

use crate::models::SyncMeta;
use crate::record::RecordKind;

/// A record type the merge engine can reconcile.
pub trait Mergeable: Clone {
    /// Kind tag used in logs and the dynamic record envelope
    const KIND: RecordKind;

    /// Sync columns of the record
    fn sync(&self) -> &SyncMeta;

    /// Mutable sync columns of the record
    fn sync_mut(&mut self) -> &mut SyncMeta;

    /// Resolve the entity-specific fields.
    ///
    /// `merged` starts as a copy of the baseline with the common sync columns
    /// already resolved.
    fn merge_fields(merged: &mut Self, ctx: &MergeContext<'_, Self>);
}
