//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers
//! - **[`models`]**: Request/response data structures
//! - **[`extractors`]**: Request body extraction with field validation
//!
//! # Endpoints
//!
//! - `POST /cars`: register a car
//! - `POST /cars/{car_id}/rate`: rate an existing car
//! - `GET /cars/top10`: the ten best rated cars
//!
//! All endpoints are annotated with `utoipa`; the rendered reference lives at `/docs`.

pub mod extractors;
pub mod handlers;
pub mod models;
