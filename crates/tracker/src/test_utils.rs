//! Shared test utilities
//!
//! Common helpers used across multiple test modules to reduce duplication.

#![cfg(test)]

use crate::domain::{Issue, Status};
use chrono::NaiveDate;

/// Fixed date source for stores under test.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

/// Build an issue directly, bypassing the store.
pub fn make_issue(id: u64, title: &str, status: Status) -> Issue {
    Issue {
        id,
        title: title.to_string(),
        owner: "tester".to_string(),
        status,
        created: fixed_today(),
        effort: 1,
        due: None,
    }
}

/// Route tracing output through the test writer; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
