//! Password policy for new accounts.

use serde_json::json;

use sweetshop_core::config::AuthConfig;
use sweetshop_core::error::AppError;

/// Checks new passwords against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
    enforce_strength: bool,
}

impl PasswordValidator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            enforce_strength: config.enforce_password_strength,
        }
    }

    /// Validates `password`, penalizing guesses built from `user_inputs`
    /// (username, email) when strength checking is on.
    ///
    /// Failures are validation errors with the message under
    /// `details.password`.
    pub fn validate(&self, password: &str, user_inputs: &[&str]) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(password_error(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if self.enforce_strength {
            let estimate = zxcvbn::zxcvbn(password, user_inputs);
            if estimate.score() < zxcvbn::Score::Three {
                return Err(password_error(
                    "Password is too weak. Please use a stronger password.".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn password_error(message: String) -> AppError {
    AppError::validation("Validation failed").with_details(json!({ "password": [message] }))
}
