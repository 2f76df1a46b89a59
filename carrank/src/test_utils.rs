//! Test utilities for integration testing.

use crate::api::models::{cars::CarResponse, ratings::RatingResponse};
use crate::config::{Config, DatabaseConfig, PoolSettings};
use crate::db::handlers::{Cars, Ratings, Repository};
use crate::db::models::{cars::CarCreateDBRequest, ratings::RatingCreateDBRequest};
use crate::types::CarId;
use axum_test::TestServer;
use sqlx::PgPool;

pub async fn create_test_app(pool: PgPool) -> TestServer {
    let config = create_test_config();

    let app = crate::Application::new_with_pool(config, pool)
        .await
        .expect("Failed to create application");

    app.into_test_server()
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig {
            // The pool is handed in by sqlx::test, which has already applied migrations
            url: "unused".to_string(),
            pool: PoolSettings {
                max_connections: 1,
                min_connections: 1,
                ..Default::default()
            },
            run_migrations: false,
        },
        ..Default::default()
    }
}

pub async fn create_test_car(pool: &PgPool, brand: &str, model: &str, production_year: i32) -> CarResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let request = CarCreateDBRequest {
        brand: brand.to_string(),
        model: model.to_string(),
        production_year,
    };

    Cars::new(&mut conn)
        .create(&request)
        .await
        .expect("Failed to create test car")
        .into()
}

pub async fn create_test_rating(pool: &PgPool, car_id: CarId, rating: i32) -> RatingResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");

    Ratings::new(&mut conn)
        .create(&RatingCreateDBRequest { car_id, rating })
        .await
        .expect("Failed to create test rating")
        .into()
}
