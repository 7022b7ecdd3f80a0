//! User model

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::{SyncMeta, UserId, WorkspaceId};

/// What the start button does when a timer is already stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrackingMode {
    /// Continue the last entry
    Continue,
    /// Start a fresh entry
    #[default]
    StartNew,
}

/// How durations are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DurationFormat {
    /// `1:23:45`
    #[default]
    Classic,
    /// `1:23:45` with short units below an hour
    Improved,
    /// `1.40 h`
    Decimal,
}

/// The signed-in user and their preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(flatten)]
    pub sync: SyncMeta,
    pub name: String,
    pub email: String,
    #[serde(default = "default_start_of_week")]
    pub start_of_week: Weekday,
    #[serde(default)]
    pub date_format: String,
    #[serde(default)]
    pub time_format: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub send_product_emails: bool,
    #[serde(default)]
    pub send_timer_notifications: bool,
    #[serde(default)]
    pub send_weekly_report: bool,
    #[serde(default)]
    pub tracking_mode: TrackingMode,
    #[serde(default)]
    pub duration_format: DurationFormat,
    #[serde(default)]
    pub default_workspace_id: Option<WorkspaceId>,
}

const fn default_start_of_week() -> Weekday {
    Weekday::Mon
}

impl User {
    /// Create a new local user
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            sync: SyncMeta::new_local(),
            name: name.into(),
            email: email.into(),
            start_of_week: default_start_of_week(),
            date_format: "MM/DD/YYYY".to_string(),
            time_format: "h:mm A".to_string(),
            image_url: None,
            locale: String::new(),
            timezone: "UTC".to_string(),
            send_product_emails: false,
            send_timer_notifications: true,
            send_weekly_report: false,
            tracking_mode: TrackingMode::default(),
            duration_format: DurationFormat::default(),
            default_workspace_id: None,
        }
    }
}
