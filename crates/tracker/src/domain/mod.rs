//! Core domain types and operations for the issue tracker.
//!
//! This module provides the domain layer containing:
//! - **types**: Core data structures (Issue, IssueDraft, Status, StatusFilter)
//! - **queries**: Pure filter operations on issue collections
//!
//! Nothing in the domain layer mutates shared state, so it can be used on any
//! snapshot independently of the store.

pub mod queries;
pub mod types;

pub use types::*;
