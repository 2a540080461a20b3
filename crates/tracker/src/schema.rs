//! JSON Schema export for the data a presentation layer exchanges with the store.
//!
//! A renderer consumes snapshots (arrays of issues) and submits drafts; these
//! schemas describe both shapes so a front end can be checked against them.

use crate::domain::{Issue, IssueDraft};
use schemars::schema::RootSchema;
use schemars::schema_for;

/// Schema of a serialized [`crate::Snapshot`].
pub fn snapshot_schema() -> RootSchema {
    schema_for!(Vec<Issue>)
}

/// Schema of a draft submitted to [`crate::IssueStore::add`].
pub fn draft_schema() -> RootSchema {
    schema_for!(IssueDraft)
}

/// Pretty-printed JSON of [`snapshot_schema`].
pub fn snapshot_schema_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&snapshot_schema())
}
