//! HTTP request handlers for all API endpoints.
//!
//! Each handler receives an already validated body through
//! [`ValidatedJson`](crate::api::extractors::ValidatedJson), runs its repository work
//! inside one transaction and commits before responding. Any early return drops the
//! transaction, which rolls it back.
//!
//! - [`cars`]: car creation and the top-rated ranking
//! - [`ratings`]: rating an existing car

pub mod cars;
pub mod ratings;
