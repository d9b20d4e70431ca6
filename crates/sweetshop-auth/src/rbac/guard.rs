//! Authorization guards.
//!
//! The gate in front of the router never rejects; these guards are where a
//! missing or insufficient identity turns into an error.

use sweetshop_core::error::AppError;
use sweetshop_core::result::AppResult;

use crate::identity::Identity;

/// Fails with 401 when there is no identity.
pub fn require_authenticated(identity: Option<&Identity>) -> AppResult<&Identity> {
    identity.ok_or_else(|| AppError::authentication("Unauthenticated"))
}

/// Fails with 403 unless the identity is an admin. Anonymous callers get
/// 403 too.
pub fn require_admin(identity: Option<&Identity>) -> AppResult<&Identity> {
    match identity {
        Some(identity) if identity.is_admin() => Ok(identity),
        _ => Err(AppError::authorization("Forbidden")),
    }
}
