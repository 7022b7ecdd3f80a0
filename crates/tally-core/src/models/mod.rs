//! Data models for Tally

mod client;
mod id;
mod membership;
mod project;
mod sync;
mod tag;
mod task;
mod time_entry;
mod user;
mod workspace;

pub use client::Client;
pub use id::{
    ClientId, ProjectId, ProjectMembershipId, TagId, TaskId, TimeEntryId, UserId,
    WorkspaceId, WorkspaceMembershipId,
};
pub use membership::{ProjectMembership, WorkspaceMembership};
pub use project::Project;
pub use sync::SyncMeta;
pub use tag::Tag;
pub use task::Task;
pub use time_entry::{TimeEntry, TimeEntryState};
pub use user::{DurationFormat, TrackingMode, User};
pub use workspace::{RoundingMode, Workspace};
