//! Request body extraction with field validation.

use crate::api::models::validation::{BODY_FIELD, ValidationErrors};
use crate::errors::Error;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde_json::Value;

/// JSON body parsed into `T` through `TryFrom<Value>`.
///
/// The Content-Type header is not inspected. An empty body is treated as `null` and
/// malformed JSON is reported against `body`, so both surface as validation errors
/// rather than as rejections with their own status codes.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: TryFrom<Value, Error = ValidationErrors> + Send,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => Error::PayloadTooLarge {
                    message: rejection.body_text(),
                },
                _ => Error::BadRequest {
                    message: rejection.body_text(),
                },
            })?;

        let payload = parse_payload(&bytes)?;
        Ok(Self(T::try_from(payload)?))
    }
}

fn parse_payload(bytes: &[u8]) -> Result<Value, ValidationErrors> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| ValidationErrors::single(BODY_FIELD, format!("invalid JSON: {e}")))
}
