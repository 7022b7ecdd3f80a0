/// Read-only view over one merge run, handed to [`Mergeable::merge_fields`].
///
/// [`Mergeable::merge_fields`]: super::Mergeable::merge_fields
#[derive(Debug)]
pub struct MergeContext<'a, T> {
    baseline: &'a T,
    changes: &'a [T],
    latest: &'a T,
}

impl<'a, T> MergeContext<'a, T> {
    pub(crate) const fn new(baseline: &'a T, changes: &'a [T], latest: &'a T) -> Self {
        Self {
            baseline,
            changes,
            latest,
        }
    }

    /// The record every candidate is compared against
    pub const fn baseline(&self) -> &'a T {
        self.baseline
    }

    /// The candidate with the most recent `modified_at`
    pub const fn latest(&self) -> &'a T {
        self.latest
    }

    /// First candidate, in arrival order, whose `field` differs from the baseline.
    pub fn changed_by<V>(&self, field: impl Fn(&T) -> &V) -> Option<&'a T>
    where
        V: PartialEq + ?Sized,
    {
        let original = field(self.baseline);
        self.changes.iter().find(|&change| field(change) != original)
    }

    /// Record holding the resolved value of `field`: the first candidate that
    /// changed it, or the baseline when none did.
    pub fn data<V>(&self, field: impl Fn(&T) -> &V) -> &'a T
    where
        V: PartialEq + ?Sized,
    {
        self.changed_by(field).unwrap_or(self.baseline)
    }

    /// Resolved value of `field`.
    pub fn value<V>(&self, field: impl Fn(&T) -> &V) -> V
    where
        V: PartialEq + Clone,
    {
        field(self.data(&field)).clone()
    }
}
