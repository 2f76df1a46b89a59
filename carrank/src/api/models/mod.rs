//! API request and response data models.
//!
//! These are distinct from the database models in [`crate::db::models`], so the wire
//! contract can evolve separately from storage. Request models are built from raw JSON
//! through `TryFrom<serde_json::Value>`, which reports every invalid field at once.
//!
//! - [`cars`]: car creation and the top-rated listing
//! - [`ratings`]: rating creation
//! - [`validation`]: field readers and the structured validation error

pub mod cars;
pub mod ratings;
pub mod validation;
