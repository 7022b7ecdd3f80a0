//! Dynamically typed record envelope.
//!
//! The typed [`MergeEngine`] only accepts one record type per engine. Records
//! arriving as JSON carry a `kind` tag instead; this module checks every
//! candidate against the baseline's kind before handing them to the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::merge::{MergeEngine, Mergeable};
use crate::models::{
    Client, Project, ProjectMembership, SyncMeta, Tag, Task, TimeEntry, User, Workspace,
    WorkspaceMembership,
};

/// The kinds of record the engine can merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Client,
    Tag,
    User,
    Workspace,
    WorkspaceMembership,
    ProjectMembership,
    Project,
    Task,
    TimeEntry,
}

impl RecordKind {
    pub const ALL: [Self; 9] = [
        Self::Client,
        Self::Tag,
        Self::User,
        Self::Workspace,
        Self::WorkspaceMembership,
        Self::ProjectMembership,
        Self::Project,
        Self::Task,
        Self::TimeEntry,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Tag => "tag",
            Self::User => "user",
            Self::Workspace => "workspace",
            Self::WorkspaceMembership => "workspace-membership",
            Self::ProjectMembership => "project-membership",
            Self::Project => "project",
            Self::Task => "task",
            Self::TimeEntry => "time-entry",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('_', "-").to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

/// A record of any kind, tagged with `"kind"` in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnyRecord {
    Client(Client),
    Tag(Tag),
    User(User),
    Workspace(Workspace),
    WorkspaceMembership(WorkspaceMembership),
    ProjectMembership(ProjectMembership),
    Project(Project),
    Task(Task),
    TimeEntry(TimeEntry),
}

macro_rules! any_record_variants {
    ($($variant:ident),* $(,)?) => {
        impl AnyRecord {
            /// Kind of the wrapped record
            #[must_use]
            pub const fn kind(&self) -> RecordKind {
                match self {
                    $(Self::$variant(_) => RecordKind::$variant,)*
                }
            }

            /// Sync columns of the wrapped record
            #[must_use]
            pub const fn sync(&self) -> &SyncMeta {
                match self {
                    $(Self::$variant(record) => &record.sync,)*
                }
            }
        }

        $(
            impl From<$variant> for AnyRecord {
                fn from(record: $variant) -> Self {
                    Self::$variant(record)
                }
            }

            impl TryFrom<AnyRecord> for $variant {
                type Error = AnyRecord;

                fn try_from(record: AnyRecord) -> std::result::Result<Self, AnyRecord> {
                    match record {
                        AnyRecord::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*

        /// Merge records of any kind.
        ///
        /// Every candidate must have the same kind as the baseline.
        pub fn merge_records(baseline: AnyRecord, candidates: Vec<AnyRecord>) -> Result<AnyRecord> {
            match baseline {
                $(AnyRecord::$variant(baseline) => {
                    merge_typed(baseline, candidates).map(AnyRecord::$variant)
                })*
            }
        }
    };
}

any_record_variants!(
    Client,
    Tag,
    User,
    Workspace,
    WorkspaceMembership,
    ProjectMembership,
    Project,
    Task,
    TimeEntry,
);

fn merge_typed<T>(baseline: T, candidates: Vec<AnyRecord>) -> Result<T>
where
    T: Mergeable + TryFrom<AnyRecord, Error = AnyRecord>,
{
    let mut engine = MergeEngine::new(baseline);
    for (index, candidate) in candidates.into_iter().enumerate() {
        let candidate = T::try_from(candidate).map_err(|other| Error::KindMismatch {
            expected: T::KIND,
            found: other.kind(),
            index,
        })?;
        engine.add(candidate);
    }
    Ok(engine.into_result())
}

/// A merge job as exchanged by sync tooling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeRequest {
    pub baseline: AnyRecord,
    #[serde(default)]
    pub candidates: Vec<AnyRecord>,
}

impl MergeRequest {
    /// Parse a request from JSON
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Run the merge
    pub fn resolve(self) -> Result<AnyRecord> {
        merge_records(self.baseline, self.candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkspaceId;

    #[test]
    fn record_kind_round_trips_names() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.as_str().parse::<RecordKind>().unwrap(), kind);
        }
        assert_eq!(
            "time_entry".parse::<RecordKind>().unwrap(),
            RecordKind::TimeEntry
        );
        assert!(matches!(
            "invoice".parse::<RecordKind>(),
            Err(Error::UnknownKind(_))
        ));
    }

    #[test]
    fn record_kind_serde_matches_display() {
        let json = serde_json::to_string(&RecordKind::WorkspaceMembership).unwrap();
        assert_eq!(json, "\"workspace-membership\"");
    }

    #[test]
    fn any_record_carries_kind_tag() {
        let tag = Tag::new(WorkspaceId::new(), "urgent");
        let json = serde_json::to_value(AnyRecord::from(tag.clone())).unwrap();
        assert_eq!(json["kind"], "tag");
        assert_eq!(json["name"], "urgent");

        let parsed: AnyRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, AnyRecord::Tag(tag));
    }

    #[test]
    fn merge_records_rejects_mismatched_candidate() {
        let workspace_id = WorkspaceId::new();
        let baseline = AnyRecord::from(Tag::new(workspace_id, "a"));
        let candidates = vec![
            AnyRecord::from(Tag::new(workspace_id, "b")),
            AnyRecord::from(Client::new(workspace_id, "Acme")),
        ];

        let error = merge_records(baseline, candidates).unwrap_err();
        assert!(matches!(
            error,
            Error::KindMismatch {
                expected: RecordKind::Tag,
                found: RecordKind::Client,
                index: 1,
            }
        ));
    }
}
