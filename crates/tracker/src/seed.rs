//! Built-in starting issues.
//!
//! A fresh session shows these three issues so the table, filter, and status
//! controls have something to work with before the user adds anything.

use crate::domain::{Issue, Status};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The seed issues, ids 1 through 3, one per status.
pub fn seed_issues() -> Vec<Issue> {
    vec![
        Issue {
            id: 1,
            title: "Bug in login page".to_string(),
            owner: "Alice".to_string(),
            status: Status::Open,
            created: date(2025, 11, 20),
            effort: 3,
            due: Some("2025-11-30".to_string()),
        },
        Issue {
            id: 2,
            title: "UI alignment problem".to_string(),
            owner: "Bob".to_string(),
            status: Status::InProgress,
            created: date(2025, 11, 18),
            effort: 5,
            due: Some("2025-12-05".to_string()),
        },
        Issue {
            id: 3,
            title: "Add export button".to_string(),
            owner: "Charlie".to_string(),
            status: Status::Closed,
            created: date(2025, 11, 10),
            effort: 2,
            due: None,
        },
    ]
}
