//! Database repository for cars.

use crate::db::errors::Result;
use crate::db::handlers::repository::Repository;
use crate::db::models::cars::{Car, CarCreateDBRequest, CarDBResponse};
use crate::types::CarId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Cars<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Cars<'c> {
    /// Create a new Cars repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Cars<'c> {
    type CreateRequest = CarCreateDBRequest;
    type Response = CarDBResponse;
    type Id = CarId;

    #[instrument(skip(self, request), fields(brand = %request.brand, model = %request.model), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO car (brand, model, production_year)
            VALUES ($1, $2, $3)
            RETURNING id, brand, model, production_year
            "#,
        )
        .bind(&request.brand)
        .bind(&request.model)
        .bind(request.production_year)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(car)
    }

    #[instrument(skip(self), fields(car_id = id), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let car = sqlx::query_as::<_, Car>("SELECT id, brand, model, production_year FROM car WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(car)
    }
}
