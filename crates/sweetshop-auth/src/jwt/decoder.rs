//! Token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use sweetshop_core::error::AppError;

use super::claims::Claims;
use super::key::SigningKey;
use crate::identity::Identity;

/// Message for every token failure, whatever the cause.
pub const INVALID_TOKEN: &str = "Invalid token";

/// Verifies HS256 identity tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a decoder bound to `key`.
    pub fn new(key: &SigningKey) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: key.decoding_key(),
            validation,
        }
    }

    /// Verifies signature and expiry and returns the claims.
    ///
    /// Malformed, wrongly-signed and expired tokens all produce the same
    /// authentication error; the cause is only logged at debug level.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "Token rejected");
                AppError::authentication(INVALID_TOKEN)
            })
    }

    /// Verifies a token and returns the identity it carries.
    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        self.decode(token).map(Identity::from)
    }
}
