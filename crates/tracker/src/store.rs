//! The issue store: sole owner and mutator of the issue collection.
//!
//! Ids are derived from the current maximum rather than a counter. That is
//! only sound with a single writer, which `&mut self` on every mutating
//! method enforces: computing `max + 1` and appending happen in one exclusive
//! borrow.

use crate::config::{TrackerConfig, UnknownIdPolicy};
use crate::domain::queries::{self, StatusCounts};
use crate::domain::{Issue, IssueDraft, Status, StatusFilter};
use crate::error::{NotFoundError, Result, TrackerError, ValidationError};
use crate::seed;
use crate::snapshot::{Snapshot, MAX_INITIAL_ID};
use crate::validation::DraftValidator;
use chrono::{NaiveDate, Utc};
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::{debug, info, warn};

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// In-memory issue collection with copy-on-write snapshots.
///
/// # Examples
///
/// ```
/// use tracker::{IssueDraft, IssueStore, Status, StatusFilter};
///
/// let mut store = IssueStore::seeded();
/// let issue = store
///     .add(&IssueDraft::new("Add export button v2", "Eve").effort("4"))
///     .unwrap();
/// assert_eq!(issue.id, 4);
///
/// store.set_status(issue.id, Status::InProgress).unwrap();
/// let ids: Vec<u64> = store
///     .filter_by_status(StatusFilter::Only(Status::InProgress))
///     .iter()
///     .map(|i| i.id)
///     .collect();
/// assert_eq!(ids, vec![2, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct IssueStore {
    snapshot: Snapshot,
    validator: DraftValidator,
    unknown_id: UnknownIdPolicy,
    today: fn() -> NaiveDate,
}

impl IssueStore {
    /// Create an empty store with default settings.
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::empty(),
            validator: DraftValidator::default(),
            unknown_id: UnknownIdPolicy::default(),
            today: utc_today,
        }
    }

    /// Create a store holding the built-in seed issues.
    pub fn seeded() -> Self {
        Self {
            snapshot: Snapshot::from_vec(seed::seed_issues()),
            ..Self::new()
        }
    }

    /// Create a store configured from `tracker.toml` settings.
    pub fn from_config(config: &TrackerConfig) -> Self {
        let base = if config.seed() {
            Self::seeded()
        } else {
            Self::new()
        };
        Self {
            validator: DraftValidator::new(&config.validation()),
            unknown_id: config.unknown_id_policy(),
            ..base
        }
    }

    /// Create a store from existing issues, kept in the given order.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if an id is 0 or above [`MAX_INITIAL_ID`]
    /// - `DuplicateId` if two issues share an id
    pub fn with_issues<I>(issues: I) -> Result<Self>
    where
        I: IntoIterator<Item = Issue>,
    {
        let issues: Vec<Issue> = issues.into_iter().collect();
        let mut seen = HashSet::with_capacity(issues.len());

        for issue in &issues {
            if issue.id == 0 || issue.id > MAX_INITIAL_ID {
                return Err(TrackerError::InvalidId(issue.id));
            }
            if !seen.insert(issue.id) {
                return Err(TrackerError::DuplicateId(issue.id));
            }
        }

        Ok(Self {
            snapshot: Snapshot::from_vec(issues),
            ..Self::new()
        })
    }

    /// Builder method to replace the date source used for `created`.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Builder method to replace the draft validator.
    pub fn with_validator(mut self, validator: DraftValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Builder method to choose what `set_status` does with unknown ids.
    pub fn with_unknown_id_policy(mut self, policy: UnknownIdPolicy) -> Self {
        self.unknown_id = policy;
        self
    }

    /// Validate a draft and append it as a new issue.
    ///
    /// The new issue gets `max(id) + 1` (or 1 when empty), today's date,
    /// `Open` unless the draft names a status, and the draft's effort as whole
    /// days (see [`IssueDraft::parsed_effort`]). The draft is borrowed so a rejected
    /// submission leaves the caller's input intact.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if title or owner is missing; the collection
    /// is left unchanged.
    pub fn add(&mut self, draft: &IssueDraft) -> std::result::Result<Issue, ValidationError> {
        if let Err(err) = self.validator.validate(draft) {
            warn!(%err, "rejected issue draft");
            return Err(err);
        }

        let issue = Issue {
            id: self.snapshot.next_id(),
            title: draft.title.clone(),
            owner: draft.owner.clone(),
            status: draft.status.unwrap_or_default(),
            created: (self.today)(),
            effort: draft.parsed_effort(),
            due: draft.normalized_due(),
        };

        self.snapshot = self.snapshot.appended(issue.clone());
        info!(id = issue.id, status = %issue.status, "issue created");

        Ok(issue)
    }

    /// Change the status of one issue; every other field and issue is kept.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError` if no issue has `id` and the store uses the
    /// default `UnknownIdPolicy::Error`. With `UnknownIdPolicy::Ignore` the
    /// call succeeds and nothing changes.
    pub fn set_status(
        &mut self,
        id: u64,
        status: Status,
    ) -> std::result::Result<(), NotFoundError> {
        match self.snapshot.with_status(id, status) {
            Some(updated) => {
                self.snapshot = updated;
                info!(id, %status, "issue status changed");
                Ok(())
            }
            None => match self.unknown_id {
                UnknownIdPolicy::Error => {
                    warn!(id, "status change for unknown issue");
                    Err(NotFoundError { id })
                }
                UnknownIdPolicy::Ignore => {
                    debug!(id, "ignoring status change for unknown issue");
                    Ok(())
                }
            },
        }
    }

    /// The current snapshot, in insertion order.
    pub fn list(&self) -> Snapshot {
        self.snapshot.clone()
    }

    /// Issues of the current snapshot selected by `criterion`.
    pub fn filter_by_status(&self, criterion: StatusFilter) -> Cow<'_, [Issue]> {
        queries::filter_by_status(&self.snapshot, criterion)
    }

    /// Per-status totals of the current snapshot.
    pub fn counts(&self) -> StatusCounts {
        queries::count_by_status(&self.snapshot)
    }

    /// Look up an issue in the current snapshot by id.
    pub fn get(&self, id: u64) -> Option<&Issue> {
        self.snapshot.get(id)
    }

    /// Number of issues in the current snapshot.
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Whether the current snapshot has no issues.
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::new()
    }
}
