//! In-Memory Issue Tracker Core
//!
//! This library owns a small collection of issues for a single session:
//! creation with auto-assigned ids, status changes, and status-filtered views.
//! A presentation layer drives it through [`IssueStore`] and re-renders from
//! the [`Snapshot`] it hands back.
//!
//! Nothing here performs I/O on the issue state path. The only file access is
//! optional configuration loading in [`config`].

pub mod config;
pub mod domain;
pub mod error;
pub mod schema;
pub mod seed;
pub mod snapshot;
pub mod store;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::{TrackerConfig, UnknownIdPolicy};
pub use domain::queries::{count_by_status, filter_by_status, StatusCounts};
pub use domain::{Issue, IssueDraft, Status, StatusFilter};
pub use error::{NotFoundError, RequiredField, TrackerError, ValidationError};
pub use snapshot::{Snapshot, MAX_INITIAL_ID};
pub use store::IssueStore;
pub use validation::{validate_draft, DraftValidator};
