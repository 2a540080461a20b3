//! Issue, draft, status and filter types.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Issue workflow status
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Status {
    /// Reported but not picked up yet (default)
    #[default]
    Open,
    /// Currently being worked on
    #[serde(rename = "In Progress")]
    InProgress,
    /// Resolved or no longer relevant
    Closed,
}

impl Status {
    /// Every status, in workflow order.
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Closed];

    /// Returns the label used by the presentation layer and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in progress" | "in_progress" | "in-progress" | "inprogress" => {
                Ok(Status::InProgress)
            }
            "closed" => Ok(Status::Closed),
            _ => Err(TrackerError::InvalidStatus(s.to_string())),
        }
    }
}

/// Criterion for a filtered view of the collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Every issue, unfiltered
    #[default]
    All,
    /// Only issues currently in the given status
    Only(Status),
}

impl StatusFilter {
    /// Check whether an issue belongs to this view
    pub fn matches(&self, issue: &Issue) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => issue.status == *status,
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        StatusFilter::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<Status>()
            .map(StatusFilter::Only)
            .map_err(|_| TrackerError::InvalidFilter(s.to_string()))
    }
}

/// A tracked work item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    /// Positive identifier, unique within the collection
    pub id: u64,
    /// Short summary
    pub title: String,
    /// Person responsible for the issue
    pub owner: String,
    /// Current workflow status
    pub status: Status,
    /// Day the issue was added (YYYY-MM-DD)
    pub created: NaiveDate,
    /// Estimated effort in work-days
    pub effort: u32,
    /// Free-form due date, not validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
}

impl Issue {
    /// Copy of this issue with only the status replaced
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// User-supplied input for a new issue, not yet validated
///
/// `effort` and `due` stay as raw text because they come straight from form
/// inputs. The store converts them when the draft is accepted.
///
/// # Examples
///
/// ```
/// use tracker::{IssueDraft, Status};
///
/// let draft = IssueDraft::new("Add export button v2", "Eve")
///     .status(Status::InProgress)
///     .effort("4");
/// assert_eq!(draft.parsed_effort(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IssueDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub effort: Option<String>,
    #[serde(default)]
    pub due: Option<String>,
}

impl IssueDraft {
    /// Create a draft with the two required fields
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            owner: owner.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the initial status
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder method to set the raw effort text
    pub fn effort(mut self, effort: impl Into<String>) -> Self {
        self.effort = Some(effort.into());
        self
    }

    /// Builder method to set the raw due date text
    pub fn due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }

    /// Effort as a whole number of days.
    ///
    /// Any finite, non-negative number is accepted: fractions are truncated
    /// and values beyond `u32::MAX` saturate. Missing, negative or
    /// non-numeric text yields 0.
    pub fn parsed_effort(&self) -> u32 {
        self.effort
            .as_deref()
            .and_then(|effort| effort.trim().parse::<f64>().ok())
            .filter(|days| days.is_finite() && *days >= 0.0)
            .map(|days| days as u32)
            .unwrap_or(0)
    }

    /// Due date text, with an empty value treated as absent.
    pub fn normalized_due(&self) -> Option<String> {
        self.due.clone().filter(|due| !due.is_empty())
    }
}
