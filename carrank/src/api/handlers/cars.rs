use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    api::{
        extractors::ValidatedJson,
        models::{
            cars::{CarCreate, CarResponse, TopRatedCarResponse},
            validation::ValidationErrors,
        },
    },
    db::{
        handlers::{Cars, Rankings, Repository},
        models::cars::CarCreateDBRequest,
    },
    errors::{Error, Result},
    types::TOP_RATED_LIMIT,
};

#[utoipa::path(
    post,
    path = "/cars",
    tag = "cars",
    summary = "Create car",
    request_body = CarCreate,
    responses(
        (status = 201, description = "Car created successfully", body = CarResponse),
        (status = 413, description = "Request body exceeds the configured limit", body = String),
        (status = 422, description = "Request validation failed", body = ValidationErrors),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_car(State(state): State<AppState>, ValidatedJson(create): ValidatedJson<CarCreate>) -> Result<(StatusCode, Json<CarResponse>)> {
    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    let request = CarCreateDBRequest::from(create);

    let car = Cars::new(&mut tx).create(&request).await?;

    tx.commit().await.map_err(|e| Error::Database(e.into()))?;
    tracing::debug!(car_id = car.id, "Created car");

    Ok((StatusCode::CREATED, Json(CarResponse::from(car))))
}

#[utoipa::path(
    get,
    path = "/cars/top10",
    tag = "cars",
    summary = "Top rated cars",
    description = "The ten cars with the highest average rating, best first. Cars that have never been rated are not listed; equal averages are ordered by ascending car id.",
    responses(
        (status = 200, description = "Ranked cars", body = [TopRatedCarResponse]),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_top_rated(State(state): State<AppState>) -> Result<Json<Vec<TopRatedCarResponse>>> {
    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;

    let rows = Rankings::new(&mut tx).top_rated(TOP_RATED_LIMIT).await?;

    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok(Json(rows.into_iter().map(TopRatedCarResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use crate::{
        api::models::cars::{CarResponse, TopRatedCarResponse},
        db::handlers::{Cars, Repository},
        test_utils::*,
    };
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_car(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app
            .post("/cars")
            .json(&json!({ "brand": "Toyota", "model": "Corolla", "production_year": 2008 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let car: CarResponse = response.json();
        assert_eq!(
            car,
            CarResponse {
                id: 1,
                brand: "Toyota".to_string(),
                model: "Corolla".to_string(),
                production_year: 2008,
            }
        );

        // Persisted, not just echoed
        let mut conn = pool.acquire().await.unwrap();
        let stored = Cars::new(&mut conn).get_by_id(car.id).await.unwrap().unwrap();
        assert_eq!(stored.brand, "Toyota");
        assert_eq!(stored.production_year, 2008);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_car_ids_increment(pool: PgPool) {
        let app = create_test_app(pool).await;

        for expected_id in 1..=3 {
            let response = app
                .post("/cars")
                .json(&json!({ "brand": "Dacia", "model": "Logan", "production_year": 2004 }))
                .await;
            response.assert_status(StatusCode::CREATED);
            assert_eq!(response.json::<CarResponse>().id, expected_id);
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_car_rejects_invalid_fields(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app
            .post("/cars")
            .json(&json!({
                "brand": "x".repeat(51),
                "model": "Corolla",
                "production_year": 1499
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Request validation failed");
        let fields: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["brand", "production_year"]);

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM car").fetch_one(&pool).await.unwrap();
        assert_eq!(count, 0);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_car_requires_every_field(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app.post("/cars").json(&json!({ "brand": "Toyota" })).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = response.json();
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_car_empty_or_null_body(pool: PgPool) {
        let app = create_test_app(pool).await;

        app.post("/cars").json(&json!({})).await.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        app.post("/cars").json(&serde_json::Value::Null).await.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        app.post("/cars").await.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        app.post("/cars").text("{not json").await.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_top_rated_empty(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        create_test_car(&pool, "Fiat", "Panda", 1980).await;

        let response = app.get("/cars/top10").await;
        response.assert_status_ok();
        let rows: Vec<TopRatedCarResponse> = response.json();
        assert!(rows.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_top_rated_fifteen_cars(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let ratings: [&[i32]; 15] = [
            &[5, 4, 5],
            &[5],
            &[3, 3, 4],
            &[1],
            &[2, 2],
            &[3],
            &[4, 4],
            &[5, 5],
            &[1, 1],
            &[5, 4],
            &[4],
            &[3],
            &[5, 5],
            &[4],
            &[2, 3],
        ];
        for (i, values) in (1..).zip(ratings) {
            let car = create_test_car(&pool, &format!("Brand_{i}"), &format!("Model_{i}"), 2000 + i).await;
            for value in values {
                app.post(&format!("/cars/{}/rate", car.id))
                    .json(&json!({ "rating": value }))
                    .await
                    .assert_status(StatusCode::CREATED);
            }
        }

        let response = app.get("/cars/top10").await;
        response.assert_status_ok();
        let rows: Vec<TopRatedCarResponse> = response.json();

        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 8, 13, 1, 10, 7, 11, 14, 3, 6]);

        let averages: Vec<f64> = rows.iter().map(|r| r.average_rating).collect();
        assert_eq!(averages, vec![5.0, 5.0, 5.0, 4.67, 4.5, 4.0, 4.0, 4.0, 3.33, 3.0]);

        assert_eq!(rows[3].brand, "Brand_1");
        assert_eq!(rows[3].model, "Model_1");
        assert_eq!(rows[3].production_year, 2001);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_top_rated_wire_shape(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let car = create_test_car(&pool, "Honda", "Civic", 1999).await;
        create_test_rating(&pool, car.id, 4).await;

        let body: serde_json::Value = app.get("/cars/top10").await.json();
        assert_eq!(
            body,
            json!([{
                "id": car.id,
                "brand": "Honda",
                "model": "Civic",
                "production_year": 1999,
                "average_rating": 4.0
            }])
        );
    }
}
