//! Membership models

use serde::{Deserialize, Serialize};

use super::{ProjectId, ProjectMembershipId, SyncMeta, UserId, WorkspaceId, WorkspaceMembershipId};

/// A user's membership in a workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceMembership {
    pub id: WorkspaceMembershipId,
    #[serde(flatten)]
    pub sync: SyncMeta,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_active: bool,
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
}

impl WorkspaceMembership {
    /// Create a new, active, non-admin membership
    #[must_use]
    pub fn new(workspace_id: WorkspaceId, user_id: UserId) -> Self {
        Self {
            id: WorkspaceMembershipId::new(),
            sync: SyncMeta::new_local(),
            is_admin: false,
            is_active: true,
            workspace_id,
            user_id,
        }
    }
}

/// A user's membership in a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMembership {
    pub id: ProjectMembershipId,
    #[serde(flatten)]
    pub sync: SyncMeta,
    #[serde(default)]
    pub is_manager: bool,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    pub project_id: ProjectId,
    pub user_id: UserId,
}

impl ProjectMembership {
    /// Create a new regular membership without a rate override
    #[must_use]
    pub fn new(project_id: ProjectId, user_id: UserId) -> Self {
        Self {
            id: ProjectMembershipId::new(),
            sync: SyncMeta::new_local(),
            is_manager: false,
            hourly_rate: None,
            project_id,
            user_id,
        }
    }
}
