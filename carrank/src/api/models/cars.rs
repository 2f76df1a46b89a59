//! API request/response models for cars.

use super::validation::{PayloadReader, ValidationErrors};
use crate::db::models::cars::{CarCreateDBRequest, CarDBResponse, CarWithAverageRating};
use crate::types::CarId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const BRAND_MAX_CHARS: usize = 50;
pub const MODEL_MAX_CHARS: usize = 100;
pub const MIN_PRODUCTION_YEAR: i32 = 1500;

/// Request body for registering a new car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CarCreate {
    /// Manufacturer name, at most 50 characters
    #[schema(example = "Toyota", max_length = 50)]
    pub brand: String,
    /// Model name, at most 100 characters
    #[schema(example = "Corolla", max_length = 100)]
    pub model: String,
    /// Year the car was built, 1500 or later
    #[schema(example = 2008, minimum = 1500)]
    pub production_year: i32,
}

impl TryFrom<Value> for CarCreate {
    type Error = ValidationErrors;

    fn try_from(payload: Value) -> Result<Self, Self::Error> {
        let mut reader = PayloadReader::new(&payload);
        let brand = reader.string("brand", BRAND_MAX_CHARS);
        let model = reader.string("model", MODEL_MAX_CHARS);
        let production_year = reader.int32("production_year", MIN_PRODUCTION_YEAR, None);

        match (brand, model, production_year) {
            (Some(brand), Some(model), Some(production_year)) if reader.is_valid() => Ok(Self {
                brand,
                model,
                production_year,
            }),
            _ => Err(reader.into_errors()),
        }
    }
}

impl From<CarCreate> for CarCreateDBRequest {
    fn from(create: CarCreate) -> Self {
        Self {
            brand: create.brand,
            model: create.model,
            production_year: create.production_year,
        }
    }
}

/// A stored car as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CarResponse {
    /// Identifier assigned on creation
    #[schema(example = 1)]
    pub id: CarId,
    #[schema(example = "Toyota")]
    pub brand: String,
    #[schema(example = "Corolla")]
    pub model: String,
    #[schema(example = 2008)]
    pub production_year: i32,
}

impl From<CarDBResponse> for CarResponse {
    fn from(db: CarDBResponse) -> Self {
        Self {
            id: db.id,
            brand: db.brand,
            model: db.model,
            production_year: db.production_year,
        }
    }
}

/// One entry of the top-rated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopRatedCarResponse {
    #[schema(example = 1)]
    pub id: CarId,
    #[schema(example = "Toyota")]
    pub brand: String,
    #[schema(example = "Corolla")]
    pub model: String,
    #[schema(example = 2008)]
    pub production_year: i32,
    /// Mean of all ratings for this car, rounded to two decimals
    #[schema(example = 4.67)]
    pub average_rating: f64,
}

impl From<CarWithAverageRating> for TopRatedCarResponse {
    fn from(db: CarWithAverageRating) -> Self {
        Self {
            id: db.id,
            brand: db.brand,
            model: db.model,
            production_year: db.production_year,
            average_rating: db.average_rating,
        }
    }
}
