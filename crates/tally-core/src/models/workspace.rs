//! Workspace model

use serde::{Deserialize, Serialize};

use super::{SyncMeta, WorkspaceId};

/// How tracked durations are rounded in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    Down,
    #[default]
    Nearest,
    Up,
}

/// A workspace owning projects, clients, tags and time entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    #[serde(flatten)]
    pub sync: SyncMeta,
    pub name: String,
    #[serde(default)]
    pub is_premium: bool,
    /// Default hourly rate applied to billable entries
    #[serde(default)]
    pub default_rate: Option<f64>,
    #[serde(default)]
    pub default_currency: String,
    /// Only admins may create projects
    #[serde(default)]
    pub project_creation_privileges: bool,
    /// Only admins see billable rates
    #[serde(default)]
    pub billable_rates_visibility: bool,
    #[serde(default)]
    pub rounding_mode: RoundingMode,
    /// Rounding step in minutes
    #[serde(default)]
    pub rounding_precision: i32,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl Workspace {
    /// Create a new local workspace
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WorkspaceId::new(),
            sync: SyncMeta::new_local(),
            name: name.into(),
            is_premium: false,
            default_rate: None,
            default_currency: "USD".to_string(),
            project_creation_privileges: false,
            billable_rates_visibility: false,
            rounding_mode: RoundingMode::default(),
            rounding_precision: 0,
            logo_url: None,
        }
    }
}
