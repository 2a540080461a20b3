//! Pure query operations on issue collections.
//!
//! These functions operate on slices of issues without touching the store, so
//! they work on any snapshot a caller holds, old or new.

use crate::domain::{Issue, Status, StatusFilter};
use serde::Serialize;
use std::borrow::Cow;

/// Derive the view of `issues` selected by `criterion`.
///
/// `StatusFilter::All` borrows the input unchanged. A specific status yields
/// the matching subsequence in original order.
///
/// # Examples
///
/// ```
/// use tracker::{filter_by_status, IssueStore, Status, StatusFilter};
///
/// let store = IssueStore::seeded();
/// let snapshot = store.list();
/// let open = filter_by_status(&snapshot, StatusFilter::Only(Status::Open));
/// assert!(open.iter().all(|issue| issue.status == Status::Open));
/// ```
pub fn filter_by_status(issues: &[Issue], criterion: StatusFilter) -> Cow<'_, [Issue]> {
    match criterion {
        StatusFilter::All => Cow::Borrowed(issues),
        StatusFilter::Only(_) => {
            let matching: Vec<Issue> = issues
                .iter()
                .filter(|issue| criterion.matches(issue))
                .cloned()
                .collect();
            tracing::debug!(
                %criterion,
                total = issues.len(),
                matched = matching.len(),
                "filtered issues"
            );
            Cow::Owned(matching)
        }
    }
}

/// Issue totals per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
    pub total: usize,
}

impl StatusCounts {
    /// Number of issues a filter would select
    pub fn for_filter(&self, criterion: StatusFilter) -> usize {
        match criterion {
            StatusFilter::All => self.total,
            StatusFilter::Only(Status::Open) => self.open,
            StatusFilter::Only(Status::InProgress) => self.in_progress,
            StatusFilter::Only(Status::Closed) => self.closed,
        }
    }
}

/// Count issues in each status.
pub fn count_by_status(issues: &[Issue]) -> StatusCounts {
    issues
        .iter()
        .fold(StatusCounts::default(), |mut counts, issue| {
            match issue.status {
                Status::Open => counts.open += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Closed => counts.closed += 1,
            }
            counts.total += 1;
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_issue;

    fn mixed_issues() -> Vec<Issue> {
        vec![
            make_issue(1, "Bug in login page", Status::Open),
            make_issue(2, "UI alignment problem", Status::InProgress),
            make_issue(3, "Add export button", Status::Closed),
            make_issue(4, "Crash on save", Status::Open),
        ]
    }

    #[test]
    fn test_all_borrows_input_unchanged() {
        let issues = mixed_issues();
        let view = filter_by_status(&issues, StatusFilter::All);

        assert!(matches!(view, Cow::Borrowed(_)));
        assert_eq!(&*view, issues.as_slice());
    }

    #[test]
    fn test_specific_status_keeps_order() {
        let issues = mixed_issues();
        let open = filter_by_status(&issues, StatusFilter::Only(Status::Open));

        let ids: Vec<u64> = open.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_no_matches_yields_empty_view() {
        let issues = vec![make_issue(1, "Only open", Status::Open)];
        let closed = filter_by_status(&issues, StatusFilter::Only(Status::Closed));
        assert!(closed.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let view = filter_by_status(&[], StatusFilter::Only(Status::Open));
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let issues = mixed_issues();
        let once = filter_by_status(&issues, StatusFilter::Only(Status::Open));
        let twice = filter_by_status(&once, StatusFilter::Only(Status::Open));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_count_by_status() {
        let counts = count_by_status(&mixed_issues());

        assert_eq!(
            counts,
            StatusCounts {
                open: 2,
                in_progress: 1,
                closed: 1,
                total: 4,
            }
        );
        assert_eq!(counts.for_filter(StatusFilter::All), 4);
        assert_eq!(counts.for_filter(StatusFilter::Only(Status::Open)), 2);
    }

    #[test]
    fn test_counts_agree_with_filter() {
        let issues = mixed_issues();
        let counts = count_by_status(&issues);

        for status in Status::ALL {
            let criterion = StatusFilter::Only(status);
            assert_eq!(
                counts.for_filter(criterion),
                filter_by_status(&issues, criterion).len()
            );
        }
    }
}
