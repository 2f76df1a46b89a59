//! Database repository for car ratings.

use crate::db::errors::{DbError, Result};
use crate::db::handlers::{cars::Cars, repository::Repository};
use crate::db::models::ratings::{Rating, RatingCreateDBRequest, RatingDBResponse};
use crate::types::{CarId, RatingId};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Ratings<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Ratings<'c> {
    /// Create a new Ratings repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Number of ratings recorded for a car
    #[instrument(skip(self), fields(car_id = car_id), err)]
    pub async fn count_for_car(&mut self, car_id: CarId) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM car_rating WHERE car_id = $1")
            .bind(car_id)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(count)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Ratings<'c> {
    type CreateRequest = RatingCreateDBRequest;
    type Response = RatingDBResponse;
    type Id = RatingId;

    /// Insert a rating after checking, on the same connection, that the car exists.
    /// A missing car yields [`DbError::ReferenceNotFound`] and nothing is written.
    #[instrument(skip(self, request), fields(car_id = request.car_id, rating = request.rating), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let car = Cars::new(&mut *self.db).get_by_id(request.car_id).await?;
        if car.is_none() {
            return Err(DbError::ReferenceNotFound {
                entity_type: "Car".to_string(),
                id: request.car_id.to_string(),
            });
        }

        let rating = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO car_rating (car_id, rating)
            VALUES ($1, $2)
            RETURNING id, car_id, rating
            "#,
        )
        .bind(request.car_id)
        .bind(request.rating)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(rating)
    }

    #[instrument(skip(self), fields(rating_id = id), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let rating = sqlx::query_as::<_, Rating>("SELECT id, car_id, rating FROM car_rating WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(rating)
    }
}
