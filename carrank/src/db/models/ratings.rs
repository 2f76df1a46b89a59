//! Database models for car ratings.

use crate::types::{CarId, RatingId};
use serde::{Deserialize, Serialize};

/// Database representation of a rating. The owning car is referenced by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Rating {
    pub id: RatingId,
    pub car_id: CarId,
    pub rating: i32,
}

/// Request to insert a rating for an existing car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingCreateDBRequest {
    pub car_id: CarId,
    pub rating: i32,
}

/// Response from database after creating or fetching a rating
pub type RatingDBResponse = Rating;
