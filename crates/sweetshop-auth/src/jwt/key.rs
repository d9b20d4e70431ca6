//! Process-wide HMAC signing key.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use jsonwebtoken::{DecodingKey, EncodingKey};
use tracing::{info, warn};

use sweetshop_core::config::AuthConfig;
use sweetshop_core::error::AppError;

/// Minimum key length in bytes for HS256.
pub const MIN_KEY_BYTES: usize = 32;

/// HMAC-SHA256 key shared by the encoder and decoder.
///
/// Built once at startup. Replacing it invalidates every outstanding token.
#[derive(Clone)]
pub struct SigningKey {
    bytes: Vec<u8>,
    generated: bool,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("len", &self.bytes.len())
            .field("generated", &self.generated)
            .finish()
    }
}

impl SigningKey {
    /// Resolve the key from configuration.
    ///
    /// A configured `jwt_secret` must be at least [`MIN_KEY_BYTES`] long.
    /// Without one, a random key is generated and tokens will not survive a
    /// restart.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        match config.jwt_secret.as_deref() {
            Some(secret) => {
                let key = Self::from_secret(secret.as_bytes())?;
                info!("Using configured JWT signing secret");
                Ok(key)
            }
            None => {
                warn!(
                    "No auth.jwt_secret configured; generated a random signing key. \
                     Issued tokens will not survive a restart"
                );
                Ok(Self::generate())
            }
        }
    }

    /// Use an explicit secret.
    pub fn from_secret(secret: &[u8]) -> Result<Self, AppError> {
        if secret.len() < MIN_KEY_BYTES {
            return Err(AppError::configuration(format!(
                "auth.jwt_secret must be at least {MIN_KEY_BYTES} bytes, got {}",
                secret.len()
            )));
        }
        Ok(Self {
            bytes: secret.to_vec(),
            generated: false,
        })
    }

    /// Generate a fresh key from the OS random number generator.
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; MIN_KEY_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self {
            bytes,
            generated: true,
        }
    }

    /// Whether the key was generated at startup rather than configured.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub(crate) fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(&self.bytes)
    }

    pub(crate) fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.bytes)
    }
}
