//! Convenience result type alias for the Sweet Shop backend.

use crate::error::AppError;

/// A specialized `Result` type for Sweet Shop operations.
pub type AppResult<T> = Result<T, AppError>;
