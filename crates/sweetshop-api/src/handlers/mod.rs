//! Route handlers organized by domain.

pub mod auth;
pub mod health;
pub mod sweet;

use sweetshop_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    AppError::not_found("Resource not found").into()
}
