//! Common type definitions.
//!
//! Entity IDs are the store-assigned `SERIAL` integers of their tables, wrapped in
//! type aliases so signatures say which table an id belongs to:
//!
//! - [`CarId`]: row id in `car`
//! - [`RatingId`]: row id in `car_rating`

pub type CarId = i32;
pub type RatingId = i32;

/// Number of rows returned by the top-rated ranking.
pub const TOP_RATED_LIMIT: i64 = 10;
