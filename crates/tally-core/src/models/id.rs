//! Local record identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new unique ID using UUID v7
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wrap an existing UUID
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the string representation of this ID
            #[must_use]
            pub fn as_str(&self) -> String {
                self.0.to_string()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

record_id!(
    /// Local identifier of a workspace
    WorkspaceId
);
record_id!(
    /// Local identifier of a client
    ClientId
);
record_id!(
    /// Local identifier of a project
    ProjectId
);
record_id!(
    /// Local identifier of a task
    TaskId
);
record_id!(
    /// Local identifier of a tag
    TagId
);
record_id!(
    /// Local identifier of a user
    UserId
);
record_id!(
    /// Local identifier of a time entry
    TimeEntryId
);
record_id!(
    /// Local identifier of a user's membership in a workspace
    WorkspaceMembershipId
);
record_id!(
    /// Local identifier of a user's membership in a project
    ProjectMembershipId
);
