//! Immutable, shared views of the issue collection.
//!
//! Every mutation in the store builds a new `Snapshot` and swaps it in. Older
//! snapshots keep pointing at their own data, so a caller that is still
//! rendering one never observes a partial update.

use crate::domain::{Issue, Status};
use serde::{Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

/// Largest id accepted in a pre-populated collection.
///
/// Half the id space stays free above it, so `max + 1` cannot overflow for
/// any number of adds a process can hold in memory.
pub const MAX_INITIAL_ID: u64 = u64::MAX / 2;

/// Insertion-ordered, immutable issue collection.
///
/// Cloning is O(1): clones share the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    issues: Arc<[Issue]>,
}

impl Snapshot {
    /// A snapshot with no issues.
    pub fn empty() -> Self {
        Self {
            issues: Arc::from(Vec::new()),
        }
    }

    pub(crate) fn from_vec(issues: Vec<Issue>) -> Self {
        Self {
            issues: Arc::from(issues),
        }
    }

    /// The issues in insertion order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Look up an issue by id.
    pub fn get(&self, id: u64) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    /// Largest id in the collection.
    pub fn max_id(&self) -> Option<u64> {
        self.issues.iter().map(|issue| issue.id).max()
    }

    /// Id the next added issue will receive: 1 when empty, otherwise max + 1.
    pub fn next_id(&self) -> u64 {
        self.max_id().map_or(1, |max| max + 1)
    }

    /// Whether two snapshots share the same backing storage.
    pub fn shares_storage_with(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.issues, &other.issues)
    }

    /// New snapshot with `issue` appended.
    pub(crate) fn appended(&self, issue: Issue) -> Self {
        let mut issues = Vec::with_capacity(self.issues.len() + 1);
        issues.extend_from_slice(&self.issues);
        issues.push(issue);
        Self::from_vec(issues)
    }

    /// New snapshot with the status of issue `id` replaced.
    ///
    /// Returns `None` if no issue has that id.
    pub(crate) fn with_status(&self, id: u64, status: Status) -> Option<Self> {
        self.get(id)?;
        let issues = self
            .issues
            .iter()
            .map(|issue| {
                if issue.id == id {
                    issue.with_status(status)
                } else {
                    issue.clone()
                }
            })
            .collect();
        Some(Self::from_vec(issues))
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for Snapshot {
    type Target = [Issue];

    fn deref(&self) -> &[Issue] {
        &self.issues
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.issues().serialize(serializer)
    }
}
