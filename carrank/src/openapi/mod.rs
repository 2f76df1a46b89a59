//! OpenAPI documentation for the car rating API.
//!
//! Served as JSON at `/api-docs/openapi.json` and rendered with Scalar at `/docs`.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Car Rating API",
        description = "Register cars, rate them from 1 to 5 and list the ten best rated."
    ),
    paths(
        api::handlers::cars::create_car,
        api::handlers::cars::get_top_rated,
        api::handlers::ratings::rate_car,
    ),
    components(
        schemas(
            api::models::cars::CarCreate,
            api::models::cars::CarResponse,
            api::models::cars::TopRatedCarResponse,
            api::models::ratings::RatingCreate,
            api::models::ratings::RatingResponse,
            api::models::validation::FieldError,
            api::models::validation::ValidationErrors,
        )
    ),
    tags(
        (name = "cars", description = "Car registration and the top-rated ranking."),
        (name = "ratings", description = "Scores from 1 to 5 attached to an existing car.

A car's position in the ranking is the mean of all its ratings, rounded to two decimals."),
    )
)]
pub struct ApiDoc;
