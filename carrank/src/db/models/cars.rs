//! Database models for cars.

use crate::types::CarId;
use serde::{Deserialize, Serialize};

/// Database representation of a car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Car {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub production_year: i32,
}

/// Request to insert a new car. Fields are expected to be validated already.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarCreateDBRequest {
    pub brand: String,
    pub model: String,
    pub production_year: i32,
}

/// Response from database after creating or fetching a car
pub type CarDBResponse = Car;

/// One row of the top-rated ranking: the car's columns plus its rounded mean rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CarWithAverageRating {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub production_year: i32,
    pub average_rating: f64,
}
