//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use sweetshop_core::error::AppError;
use sweetshop_core::types::SweetId;

use crate::error::ApiError;

/// The `{id}` segment of a sweet route.
#[derive(Debug, Clone, Copy)]
pub struct SweetPath(pub SweetId);

/// Parses a sweet id from a path segment.
pub fn parse_sweet_id(s: &str) -> Result<SweetId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid sweet id: {s}")))
}

impl<S> FromRequestParts<S> for SweetPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        Ok(Self(parse_sweet_id(&raw)?))
    }
}
