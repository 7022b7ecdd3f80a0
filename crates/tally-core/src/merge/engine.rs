use std::cell::OnceCell;

use super::{MergeContext, Mergeable};

/// Resolves one baseline and a set of candidate versions into a single record.
///
/// Build one engine per merge: construct it with the baseline, [`add`] every
/// candidate, then read [`result`]. The result is computed on first access
/// and cached until the next candidate arrives.
///
/// The engine has no internal synchronization. Separate engines share no
/// state and may run on different threads.
///
/// [`add`]: MergeEngine::add
/// [`result`]: MergeEngine::result
#[derive(Debug)]
pub struct MergeEngine<T: Mergeable> {
    baseline: T,
    changes: Vec<T>,
    resolved: OnceCell<T>,
}

impl<T: Mergeable> MergeEngine<T> {
    /// Start a merge against `baseline`.
    pub fn new(mut baseline: T) -> Self {
        baseline.sync_mut().normalize();
        Self {
            baseline,
            changes: Vec::new(),
            resolved: OnceCell::new(),
        }
    }

    /// Add a candidate version. Invalidates any cached result.
    pub fn add(&mut self, mut change: T) {
        change.sync_mut().normalize();
        self.changes.push(change);
        self.resolved.take();
    }

    /// The baseline, with `modified_at` normalized to UTC
    pub const fn baseline(&self) -> &T {
        &self.baseline
    }

    /// Number of candidates added so far
    pub const fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether no candidate has been added
    pub const fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// The resolved record
    pub fn result(&self) -> &T {
        self.resolved.get_or_init(|| self.resolve())
    }

    /// Consume the engine and return the resolved record
    pub fn into_result(mut self) -> T {
        self.resolved.take().unwrap_or_else(|| self.resolve())
    }

    fn resolve(&self) -> T {
        match self.changes.as_slice() {
            [] => self.baseline.clone(),
            [single] => single.clone(),
            [first, rest @ ..] => {
                // Strict comparison keeps the earliest arrival among equal timestamps.
                let latest = rest.iter().fold(first, |latest, change| {
                    if change.sync().modified_at > latest.sync().modified_at {
                        change
                    } else {
                        latest
                    }
                });
                self.merge(latest)
            }
        }
    }

    fn merge(&self, latest: &T) -> T {
        let ctx = MergeContext::new(&self.baseline, &self.changes, latest);
        let mut merged = self.baseline.clone();

        let sync = merged.sync_mut();
        sync.remote_id = ctx.value(|c| &c.sync().remote_id);
        sync.modified_at = latest.sync().modified_at;
        sync.deleted_at = ctx.value(|c| &c.sync().deleted_at);
        sync.is_dirty = latest.sync().is_dirty;
        sync.remote_rejected = false;

        T::merge_fields(&mut merged, &ctx);

        tracing::debug!(
            kind = %T::KIND,
            candidates = self.changes.len(),
            modified_at = %merged.sync().modified_at,
            "Merged record versions"
        );
        merged
    }
}
