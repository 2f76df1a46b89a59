//! API request/response models for car ratings.

use super::validation::{PayloadReader, ValidationErrors};
use crate::db::models::ratings::{RatingCreateDBRequest, RatingDBResponse};
use crate::types::{CarId, RatingId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Request body for rating a car. The car is identified by the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RatingCreate {
    /// Score between 1 and 5 inclusive
    #[schema(example = 4, minimum = 1, maximum = 5)]
    pub rating: i32,
}

impl TryFrom<Value> for RatingCreate {
    type Error = ValidationErrors;

    fn try_from(payload: Value) -> Result<Self, Self::Error> {
        let mut reader = PayloadReader::new(&payload);
        let rating = reader.int32("rating", MIN_RATING, Some(MAX_RATING));

        match rating {
            Some(rating) if reader.is_valid() => Ok(Self { rating }),
            _ => Err(reader.into_errors()),
        }
    }
}

impl RatingCreateDBRequest {
    pub fn new(car_id: CarId, create: RatingCreate) -> Self {
        Self {
            car_id,
            rating: create.rating,
        }
    }
}

/// A stored rating as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RatingResponse {
    #[schema(example = 1)]
    pub id: RatingId,
    /// The rated car
    #[schema(example = 1)]
    pub car_id: CarId,
    #[schema(example = 4)]
    pub rating: i32,
}

impl From<RatingDBResponse> for RatingResponse {
    fn from(db: RatingDBResponse) -> Self {
        Self {
            id: db.id,
            car_id: db.car_id,
            rating: db.rating,
        }
    }
}
