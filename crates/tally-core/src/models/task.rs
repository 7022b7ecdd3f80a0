//! Task model

use serde::{Deserialize, Serialize};

use super::{ProjectId, SyncMeta, TaskId, WorkspaceId};

/// A task inside a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(flatten)]
    pub sync: SyncMeta,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    /// Estimated effort in seconds
    #[serde(default)]
    pub estimate: i64,
    pub workspace_id: WorkspaceId,
    pub project_id: ProjectId,
}

impl Task {
    /// Create a new active task in the given project
    #[must_use]
    pub fn new(workspace_id: WorkspaceId, project_id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            sync: SyncMeta::new_local(),
            name: name.into(),
            is_active: true,
            estimate: 0,
            workspace_id,
            project_id,
        }
    }
}
