//! Client model

use serde::{Deserialize, Serialize};

use super::{ClientId, SyncMeta, WorkspaceId};

/// A customer that projects are billed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    #[serde(flatten)]
    pub sync: SyncMeta,
    pub name: String,
    pub workspace_id: WorkspaceId,
}

impl Client {
    /// Create a new local client in the given workspace
    #[must_use]
    pub fn new(workspace_id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id: ClientId::new(),
            sync: SyncMeta::new_local(),
            name: name.into(),
            workspace_id,
        }
    }
}
