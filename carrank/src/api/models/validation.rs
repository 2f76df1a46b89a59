//! Structured validation of untyped request payloads.
//!
//! Creation payloads arrive as arbitrary JSON. Each request model implements
//! `TryFrom<serde_json::Value, Error = ValidationErrors>`, reading its fields through a
//! [`PayloadReader`] which records every constraint violation instead of stopping at
//! the first one. The caller either gets a fully typed value or the complete list of
//! offending fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Location used for errors that concern the payload as a whole
pub const BODY_FIELD: &str = "body";

/// A single constraint violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field, or `body` for the payload itself
    #[schema(example = "production_year")]
    pub field: String,
    /// Human-readable description of the violated constraint
    #[schema(example = "must be greater than or equal to 1500")]
    pub message: String,
}

/// All constraint violations found in one payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, thiserror::Error)]
#[error("invalid request fields: {}", field_names(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn field_names(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>().join(", ")
}

impl ValidationErrors {
    /// A single error against one field
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field: field.to_string(),
                message: message.into(),
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of the offending fields, in the order they were checked
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }
}

/// Reads typed fields out of a JSON object, collecting violations as it goes.
///
/// A payload that is not an object (including `null`) produces one `body` error and
/// every subsequent field read returns `None` without adding more errors.
pub struct PayloadReader<'a> {
    object: Option<&'a Map<String, Value>>,
    errors: ValidationErrors,
}

impl<'a> PayloadReader<'a> {
    pub fn new(payload: &'a Value) -> Self {
        let mut errors = ValidationErrors::default();
        let object = match payload {
            Value::Object(map) => Some(map),
            Value::Null => {
                errors.push(BODY_FIELD, "request body required");
                None
            }
            _ => {
                errors.push(BODY_FIELD, "must be a JSON object");
                None
            }
        };
        Self { object, errors }
    }

    fn field(&mut self, name: &str) -> Option<&'a Value> {
        let object = self.object?;
        match object.get(name) {
            Some(value) => Some(value),
            None => {
                self.errors.push(name, "field required");
                None
            }
        }
    }

    /// A required string of at most `max_chars` characters
    pub fn string(&mut self, name: &str, max_chars: usize) -> Option<String> {
        let Value::String(s) = self.field(name)? else {
            self.errors.push(name, "must be a string");
            return None;
        };
        if s.chars().count() > max_chars {
            self.errors.push(name, format!("must be at most {max_chars} characters"));
            return None;
        }
        Some(s.clone())
    }

    /// A required integer within `min..=max`. Without an explicit `max` the value must
    /// still fit the 32-bit column it is stored in.
    pub fn int32(&mut self, name: &str, min: i32, max: Option<i32>) -> Option<i32> {
        let value = self.field(name)?;
        let Some(n) = value.as_i64() else {
            // Covers floats, numbers beyond i64, strings, booleans, null
            match value.as_u64() {
                Some(_) => self.errors.push(name, format!("must be less than or equal to {}", max.unwrap_or(i32::MAX))),
                None => self.errors.push(name, "must be an integer"),
            }
            return None;
        };
        if n < i64::from(min) {
            self.errors.push(name, format!("must be greater than or equal to {min}"));
            return None;
        }
        let upper = max.unwrap_or(i32::MAX);
        if n > i64::from(upper) {
            self.errors.push(name, format!("must be less than or equal to {upper}"));
            return None;
        }
        i32::try_from(n).ok()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}
