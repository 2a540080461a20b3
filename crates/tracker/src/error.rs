//! Error types for tracker operations.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A field that must be present before a draft becomes an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Title,
    Owner,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Title => "title",
            RequiredField::Owner => "owner",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn field_list(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A draft was rejected because required fields are missing.
///
/// Lists every missing field, so a draft with neither title nor owner reports
/// both at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field(s): {}", field_list(.missing))]
pub struct ValidationError {
    missing: Vec<RequiredField>,
}

impl ValidationError {
    pub(crate) fn new(missing: Vec<RequiredField>) -> Self {
        Self { missing }
    }

    /// Fields that were missing, in form order
    pub fn missing(&self) -> &[RequiredField] {
        &self.missing
    }

    /// Check whether a particular field was missing
    pub fn is_missing(&self, field: RequiredField) -> bool {
        self.missing.contains(&field)
    }
}

/// No issue in the collection has the requested id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("issue not found: {id}")]
pub struct NotFoundError {
    pub id: u64,
}

/// All errors the tracker can report, for callers that want a single type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: Open, In Progress, Closed")]
    InvalidStatus(String),

    #[error("invalid filter: '{0}'\n  hint: valid filters are: All, Open, In Progress, Closed")]
    InvalidFilter(String),

    #[error("duplicate issue id: {0}")]
    DuplicateId(u64),

    #[error("issue id {0} is outside the assignable range")]
    InvalidId(u64),
}

/// Result type alias for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;
