//! Time entry model

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::{ProjectId, SyncMeta, TaskId, TimeEntryId, UserId, WorkspaceId};
use crate::time::{self, Timestamp};

/// Lifecycle of a time entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeEntryState {
    /// Drafted but never started
    #[default]
    New,
    /// Timer is ticking
    Running,
    /// Stopped
    Finished,
}

/// A tracked span of time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: TimeEntryId,
    #[serde(flatten)]
    pub sync: SyncMeta,
    #[serde(default)]
    pub state: TimeEntryState,
    #[serde(default)]
    pub description: String,
    #[serde(with = "crate::time::serde_timestamp")]
    pub start_time: Timestamp,
    #[serde(default, with = "crate::time::serde_timestamp_opt")]
    pub stop_time: Option<Timestamp>,
    /// Only the duration is meaningful, not the wall-clock span
    #[serde(default)]
    pub duration_only: bool,
    #[serde(default)]
    pub is_billable: bool,
    pub user_id: UserId,
    pub workspace_id: WorkspaceId,
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    #[serde(default)]
    pub task_id: Option<TaskId>,
}

impl TimeEntry {
    /// Start a new running entry now
    #[must_use]
    pub fn start(workspace_id: WorkspaceId, user_id: UserId, description: impl Into<String>) -> Self {
        let sync = SyncMeta::new_local();
        Self {
            id: TimeEntryId::new(),
            start_time: sync.modified_at,
            sync,
            state: TimeEntryState::Running,
            description: description.into(),
            stop_time: None,
            duration_only: false,
            is_billable: false,
            user_id,
            workspace_id,
            project_id: None,
            task_id: None,
        }
    }

    /// Stop the entry at the current time
    pub fn stop(&mut self) {
        let now = time::now();
        self.stop_time = Some(now);
        self.state = TimeEntryState::Finished;
        self.sync.modified_at = now;
        self.sync.is_dirty = true;
    }

    /// Tracked duration, or `None` while the entry has no stop time
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.stop_time.map(|stop| stop - self.start_time)
    }

    /// Check whether the timer is ticking
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimeEntryState::Running
    }
}
