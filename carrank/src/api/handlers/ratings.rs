use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    api::{
        extractors::ValidatedJson,
        models::{
            ratings::{RatingCreate, RatingResponse},
            validation::ValidationErrors,
        },
    },
    db::{
        handlers::{Ratings, Repository},
        models::ratings::RatingCreateDBRequest,
    },
    errors::{Error, Result},
    types::CarId,
};

#[utoipa::path(
    post,
    path = "/cars/{car_id}/rate",
    tag = "ratings",
    summary = "Rate car",
    request_body = RatingCreate,
    params(
        ("car_id" = i64, Path, description = "Car ID")
    ),
    responses(
        (status = 201, description = "Rating recorded", body = RatingResponse),
        (status = 404, description = "Car not found", body = String),
        (status = 413, description = "Request body exceeds the configured limit", body = String),
        (status = 422, description = "Request validation failed", body = ValidationErrors),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn rate_car(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
    ValidatedJson(create): ValidatedJson<RatingCreate>,
) -> Result<(StatusCode, Json<RatingResponse>)> {
    // No stored id lies outside the column's range
    let car_id = CarId::try_from(car_id).map_err(|_| Error::NotFound {
        resource: "Car".to_string(),
        id: car_id.to_string(),
    })?;

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    let request = RatingCreateDBRequest::new(car_id, create);

    // A missing car returns early and the dropped transaction rolls back
    let rating = Ratings::new(&mut tx).create(&request).await?;

    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok((StatusCode::CREATED, Json(RatingResponse::from(rating))))
}
