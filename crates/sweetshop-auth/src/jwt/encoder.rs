//! Token issuance.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use sweetshop_core::error::AppError;
use sweetshop_entity::user::UserRole;

use super::claims::Claims;
use super::key::SigningKey;

/// Upper bound on token lifetime (one year).
const MAX_TTL_MINUTES: u64 = 60 * 24 * 365;

/// Signs HS256 identity tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl: chrono::Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

impl JwtEncoder {
    /// Creates an encoder issuing tokens valid for `ttl_minutes`, clamped to
    /// between one minute and one year.
    pub fn new(key: &SigningKey, ttl_minutes: u64) -> Self {
        let minutes = ttl_minutes.clamp(1, MAX_TTL_MINUTES) as i64;
        Self {
            encoding_key: key.encoding_key(),
            ttl: chrono::Duration::minutes(minutes),
        }
    }

    /// Issues a token for `email` with the given role, valid from now.
    pub fn issue(&self, email: &str, role: UserRole) -> Result<String, AppError> {
        self.issue_at(email, role, Utc::now())
    }

    /// Issues a token as if it had been signed at `issued_at`.
    pub fn issue_at(
        &self,
        email: &str,
        role: UserRole,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = Claims::new(email, role, issued_at, self.ttl);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
