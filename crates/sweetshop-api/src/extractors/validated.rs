//! JSON body extractor that runs `validator` rules.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use validator::{Validate, ValidationErrors};

use sweetshop_core::error::AppError;

use crate::error::ApiError;

/// Like `Json<T>`, but malformed bodies and rule violations become 400
/// responses with per-field messages.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            AppError::validation("Malformed request body")
                .with_details(json!({ "body": [rejection.body_text()] }))
        })?;

        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}

/// Flatten `validator` errors into `{field: [message, ...]}`.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut details = Map::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<Value> = field_errors
            .iter()
            .map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", e.code));
                Value::String(message)
            })
            .collect();
        details.insert(field.to_string(), Value::Array(messages));
    }
    AppError::validation("Validation failed").with_details(Value::Object(details))
}
