//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256), at least 32 bytes.
    ///
    /// When unset, a random key is generated at startup and every token
    /// becomes invalid when the process restarts.
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Minimum password length for registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Reject passwords with a zxcvbn score below 3.
    #[serde(default)]
    pub enforce_password_strength: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_minutes: default_token_ttl(),
            password_min_length: default_password_min(),
            enforce_password_strength: false,
        }
    }
}

fn default_token_ttl() -> u64 {
    60
}

fn default_password_min() -> usize {
    6
}
