//! Sync bookkeeping shared by every record

use serde::{Deserialize, Serialize};

use crate::time::{self, Timestamp};

/// Sync columns carried by every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncMeta {
    /// Server-assigned identifier, unset until the first successful push
    #[serde(default)]
    pub remote_id: Option<i64>,
    /// Last mutation time
    #[serde(with = "crate::time::serde_timestamp")]
    pub modified_at: Timestamp,
    /// Tombstone; set when the record is logically deleted
    #[serde(default, with = "crate::time::serde_timestamp_opt")]
    pub deleted_at: Option<Timestamp>,
    /// Local state has not been pushed yet
    #[serde(default)]
    pub is_dirty: bool,
    /// The server refused this version
    #[serde(default)]
    pub remote_rejected: bool,
}

impl SyncMeta {
    /// Metadata for a record created locally right now
    #[must_use]
    pub fn new_local() -> Self {
        Self {
            remote_id: None,
            modified_at: time::now(),
            deleted_at: None,
            is_dirty: true,
            remote_rejected: false,
        }
    }

    /// Metadata for a record as received from the server
    #[must_use]
    pub const fn from_remote(remote_id: i64, modified_at: Timestamp) -> Self {
        Self {
            remote_id: Some(remote_id),
            modified_at,
            deleted_at: None,
            is_dirty: false,
            remote_rejected: false,
        }
    }

    /// Check whether the record carries a tombstone
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Normalize `modified_at` to UTC in place
    pub fn normalize(&mut self) {
        self.modified_at = time::to_utc(self.modified_at);
    }
}

impl Default for SyncMeta {
    fn default() -> Self {
        Self::new_local()
    }
}
