//! JWT claims carried by every identity token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sweetshop_entity::user::UserRole;

/// Claims payload: who the token is for and what role they held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user's email.
    pub sub: String,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Build claims for `email` issued at `issued_at` and valid for `ttl`.
    pub fn new(email: &str, role: UserRole, issued_at: DateTime<Utc>, ttl: chrono::Duration) -> Self {
        Self {
            sub: email.to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }
}
