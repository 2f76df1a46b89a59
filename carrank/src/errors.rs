use crate::api::models::validation::ValidationErrors;
use crate::db::errors::DbError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

pub const VALIDATION_FAILED_MESSAGE: &str = "Request validation failed";

#[derive(ThisError, Debug)]
pub enum Error {
    /// Request payload failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The request body could not be read at all
    #[error("{message}")]
    BadRequest { message: String },

    /// The request body exceeded the configured limit
    #[error("{message}")]
    PayloadTooLarge { message: String },

    /// Requested resource not found
    #[error("{resource} with id {id} not found.")]
    NotFound { resource: String, id: String },

    /// Generic internal service error
    #[error("Failed to {operation}")]
    Internal { operation: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(db_err) => match db_err {
                DbError::ReferenceNotFound { .. } => StatusCode::NOT_FOUND,
                // Validation runs before any write, so a constraint firing is a server fault
                DbError::ForeignKeyViolation { .. } | DbError::CheckViolation { .. } | DbError::Other(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(_) => VALIDATION_FAILED_MESSAGE.to_string(),
            Error::BadRequest { message } | Error::PayloadTooLarge { message } => message.clone(),
            Error::NotFound { .. } => self.to_string(),
            Error::Internal { .. } => "Internal server error".to_string(),
            Error::Database(db_err) => match db_err {
                DbError::ReferenceNotFound { .. } => db_err.to_string(),
                DbError::ForeignKeyViolation { .. } | DbError::CheckViolation { .. } | DbError::Other(_) => {
                    "Database error occurred".to_string()
                }
            },
            Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Database(DbError::Other(_)) | Error::Internal { .. } | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(DbError::ReferenceNotFound { .. }) => {
                tracing::debug!("Client error: {}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {:?}", self);
            }
            Error::Validation(_) | Error::BadRequest { .. } | Error::PayloadTooLarge { .. } | Error::NotFound { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();

        match &self {
            Error::Validation(errors) => {
                let body = json!({
                    "message": VALIDATION_FAILED_MESSAGE,
                    "errors": errors.errors,
                });
                (status, Json(body)).into_response()
            }
            _ => (status, self.user_message()).into_response(),
        }
    }
}

/// Type alias for handler results
pub type Result<T> = std::result::Result<T, Error>;
