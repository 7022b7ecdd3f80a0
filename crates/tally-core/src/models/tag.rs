//! Tag model

use serde::{Deserialize, Serialize};

use super::{SyncMeta, TagId, WorkspaceId};

/// A label attached to time entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    #[serde(flatten)]
    pub sync: SyncMeta,
    pub name: String,
    pub workspace_id: WorkspaceId,
}

impl Tag {
    /// Create a new local tag in the given workspace
    ///
    /// Surrounding whitespace is trimmed from the name.
    #[must_use]
    pub fn new(workspace_id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id: TagId::new(),
            sync: SyncMeta::new_local(),
            name: name.into().trim().to_string(),
            workspace_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_new_trims_name() {
        let tag = Tag::new(WorkspaceId::new(), "  billable  ");
        assert_eq!(tag.name, "billable");
        assert!(tag.sync.is_dirty);
    }
}
