//! Field rules for each record type.

use super::{MergeContext, Mergeable};
use crate::models::{
    Client, Project, ProjectMembership, SyncMeta, Tag, Task, TimeEntry, User, Workspace,
    WorkspaceMembership,
};
use crate::record::RecordKind;

macro_rules! sync_access {
    () => {
        fn sync(&self) -> &SyncMeta {
            &self.sync
        }

        fn sync_mut(&mut self) -> &mut SyncMeta {
            &mut self.sync
        }
    };
}

impl Mergeable for Client {
    const KIND: RecordKind = RecordKind::Client;
    sync_access!();

    fn merge_fields(merged: &mut Self, ctx: &MergeContext<'_, Self>) {
        merged.name = ctx.value(|c| &c.name);
        merged.workspace_id = ctx.value(|c| &c.workspace_id);
    }
}

impl Mergeable for Tag {
    const KIND: RecordKind = RecordKind::Tag;
    sync_access!();

    fn merge_fields(merged: &mut Self, ctx: &MergeContext<'_, Self>) {
        merged.name = ctx.value(|c| &c.name);
        merged.workspace_id = ctx.value(|c| &c.workspace_id);
    }
}

impl Mergeable for User {
    const KIND: RecordKind = RecordKind::User;
    sync_access!();

    fn merge_fields(merged: &mut Self, ctx: &MergeContext<'_, Self>) {
        merged.name = ctx.value(|c| &c.name);
        merged.email = ctx.value(|c| &c.email);
        merged.start_of_week = ctx.value(|c| &c.start_of_week);
        merged.date_format = ctx.value(|c| &c.date_format);
        merged.time_format = ctx.value(|c| &c.time_format);
        merged.image_url = ctx.value(|c| &c.image_url);
        merged.locale = ctx.value(|c| &c.locale);
        merged.timezone = ctx.value(|c| &c.timezone);
        merged.send_product_emails = ctx.value(|c| &c.send_product_emails);
        merged.send_timer_notifications = ctx.value(|c| &c.send_timer_notifications);
        merged.send_weekly_report = ctx.value(|c| &c.send_weekly_report);
        merged.tracking_mode = ctx.value(|c| &c.tracking_mode);
        merged.duration_format = ctx.value(|c| &c.duration_format);
        merged.default_workspace_id = ctx.value(|c| &c.default_workspace_id);
    }
}

impl Mergeable for Workspace {
    const KIND: RecordKind = RecordKind::Workspace;
    sync_access!();

    fn merge_fields(merged: &mut Self, ctx: &MergeContext<'_, Self>) {
        merged.name = ctx.value(|c| &c.name);
        merged.is_premium = ctx.value(|c| &c.is_premium);
        merged.default_rate = ctx.value(|c| &c.default_rate);
        merged.default_currency = ctx.value(|c| &c.default_currency);
        merged.project_creation_privileges = ctx.value(|c| &c.project_creation_privileges);
        merged.billable_rates_visibility = ctx.value(|c| &c.billable_rates_visibility);
        merged.rounding_mode = ctx.value(|c| &c.rounding_mode);
        merged.rounding_precision = ctx.value(|c| &c.rounding_precision);
        merged.logo_url = ctx.value(|c| &c.logo_url);
    }
}

impl Mergeable for WorkspaceMembership {
    const KIND: RecordKind = RecordKind::WorkspaceMembership;
    sync_access!();

    fn merge_fields(merged: &mut Self, ctx: &MergeContext<'_, Self>) {
        merged.is_admin = ctx.value(|c| &c.is_admin);
        merged.is_active = ctx.value(|c| &c.is_active);
        merged.workspace_id = ctx.value(|c| &c.workspace_id);
        merged.user_id = ctx.value(|c| &c.user_id);
    }
}

impl Mergeable for ProjectMembership {
    const KIND: RecordKind = RecordKind::ProjectMembership;
    sync_access!();

    fn merge_fields(merged: &mut Self, ctx: &MergeContext<'_, Self>) {
        merged.is_manager = ctx.value(|c| &c.is_manager);
        merged.hourly_rate = ctx.value(|c| &c.hourly_rate);
        merged.project_id = ctx.value(|c| &c.project_id);
        merged.user_id = ctx.value(|c| &c.user_id);
    }
}

impl Mergeable for Project {
    const KIND: RecordKind = RecordKind::Project;
    sync_access!();

    fn merge_fields(merged: &mut Self, ctx: &MergeContext<'_, Self>) {
        merged.name = ctx.value(|c| &c.name);
        merged.color = ctx.value(|c| &c.color);
        merged.is_active = ctx.value(|c| &c.is_active);
        merged.is_billable = ctx.value(|c| &c.is_billable);
        merged.is_private = ctx.value(|c| &c.is_private);
        merged.is_template = ctx.value(|c| &c.is_template);
        merged.use_tasks_estimate = ctx.value(|c| &c.use_tasks_estimate);

        // Most specific key first: a changed client implies its own workspace.
        let master = ctx
            .changed_by(|c| &c.client_id)
            .or_else(|| ctx.changed_by(|c| &c.workspace_id))
            .unwrap_or_else(|| ctx.baseline());
        tracing::trace!(workspace_id = %master.workspace_id, "Project relations master chosen");
        merged.workspace_id = master.workspace_id;
        merged.client_id = master.client_id;
    }
}

impl Mergeable for Task {
    const KIND: RecordKind = RecordKind::Task;
    sync_access!();

    fn merge_fields(merged: &mut Self, ctx: &MergeContext<'_, Self>) {
        merged.name = ctx.value(|c| &c.name);
        merged.is_active = ctx.value(|c| &c.is_active);
        merged.estimate = ctx.value(|c| &c.estimate);

        let master = ctx
            .changed_by(|c| &c.project_id)
            .or_else(|| ctx.changed_by(|c| &c.workspace_id))
            .unwrap_or_else(|| ctx.baseline());
        tracing::trace!(project_id = %master.project_id, "Task relations master chosen");
        merged.workspace_id = master.workspace_id;
        merged.project_id = master.project_id;
    }
}

impl Mergeable for TimeEntry {
    const KIND: RecordKind = RecordKind::TimeEntry;
    sync_access!();

    fn merge_fields(merged: &mut Self, ctx: &MergeContext<'_, Self>) {
        merged.state = ctx.value(|c| &c.state);
        merged.description = ctx.value(|c| &c.description);
        merged.start_time = ctx.value(|c| &c.start_time);
        merged.stop_time = ctx.value(|c| &c.stop_time);
        merged.duration_only = ctx.value(|c| &c.duration_only);
        merged.is_billable = ctx.value(|c| &c.is_billable);
        merged.user_id = ctx.value(|c| &c.user_id);

        let master = ctx
            .changed_by(|c| &c.task_id)
            .or_else(|| ctx.changed_by(|c| &c.project_id))
            .or_else(|| ctx.changed_by(|c| &c.workspace_id))
            .unwrap_or_else(|| ctx.baseline());
        tracing::trace!(workspace_id = %master.workspace_id, "Time entry relations master chosen");
        merged.workspace_id = master.workspace_id;
        merged.project_id = master.project_id;
        merged.task_id = master.task_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::MergeEngine;
    use crate::models::{ClientId, WorkspaceId};
    use crate::time::parse_timestamp;
    use pretty_assertions::assert_eq;

    fn at(mut project: Project, modified_at: &str) -> Project {
        project.sync.modified_at = parse_timestamp(modified_at).unwrap();
        project
    }

    #[test]
    fn project_relations_follow_client_change() {
        let w1 = WorkspaceId::new();
        let w2 = WorkspaceId::new();
        let client_in_w2 = ClientId::new();
        let base = at(Project::new(w1, "Site"), "2024-01-01T00:00:00Z");

        // Moves the project to w2 without a client.
        let mut moved = at(base.clone(), "2024-01-02T00:00:00Z");
        moved.workspace_id = w2;
        // Attaches a w2 client and also records the move.
        let mut billed = at(base.clone(), "2024-01-03T00:00:00Z");
        billed.workspace_id = w2;
        billed.client_id = Some(client_in_w2);

        let mut engine = MergeEngine::new(base);
        engine.add(moved);
        engine.add(billed);
        let merged = engine.into_result();

        assert_eq!(merged.workspace_id, w2);
        assert_eq!(merged.client_id, Some(client_in_w2));
    }

    #[test]
    fn project_keeps_baseline_relations_when_unchanged() {
        let base = at(
            Project::new(WorkspaceId::new(), "Site").with_client(ClientId::new()),
            "2024-01-01T00:00:00Z",
        );
        let mut renamed = at(base.clone(), "2024-01-02T00:00:00Z");
        renamed.name = "Site v2".to_string();
        let mut recolored = at(base.clone(), "2024-01-03T00:00:00Z");
        recolored.color = 7;

        let mut engine = MergeEngine::new(base.clone());
        engine.add(renamed);
        engine.add(recolored);
        let merged = engine.into_result();

        assert_eq!(merged.name, "Site v2");
        assert_eq!(merged.color, 7);
        assert_eq!(merged.workspace_id, base.workspace_id);
        assert_eq!(merged.client_id, base.client_id);
        assert_eq!(merged.id, base.id);
    }
}
