//! Project model

use serde::{Deserialize, Serialize};

use super::{ClientId, ProjectId, SyncMeta, WorkspaceId};

/// A project inside a workspace, optionally billed to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(flatten)]
    pub sync: SyncMeta,
    pub name: String,
    /// Palette index
    #[serde(default)]
    pub color: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_billable: bool,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_template: bool,
    #[serde(default)]
    pub use_tasks_estimate: bool,
    pub workspace_id: WorkspaceId,
    #[serde(default)]
    pub client_id: Option<ClientId>,
}

impl Project {
    /// Create a new active local project
    #[must_use]
    pub fn new(workspace_id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            sync: SyncMeta::new_local(),
            name: name.into(),
            color: 0,
            is_active: true,
            is_billable: false,
            is_private: true,
            is_template: false,
            use_tasks_estimate: false,
            workspace_id,
            client_id: None,
        }
    }

    /// Attach the project to a client
    #[must_use]
    pub const fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }
}
