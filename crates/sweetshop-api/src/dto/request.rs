//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use sweetshop_entity::sweet::{NewSweet, SweetFilter};
use sweetshop_service::RegisterInput;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,
    /// Email, trimmed before the format check. Bounded by the `users.email` column.
    #[validate(
        length(max = 255, message = "Email must be at most 255 characters"),
        custom(function = "validate_email_trimmed")
    )]
    pub email: String,
    /// Plaintext password; the length policy is applied by the service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Body for creating or fully replacing a sweet.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SweetRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Category is required"))]
    pub category: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    pub price: f64,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

impl From<SweetRequest> for NewSweet {
    fn from(req: SweetRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            category: req.category.trim().to_string(),
            price: req.price,
            quantity: req.quantity,
            image_url: req.image_url.filter(|url| !url.trim().is_empty()),
            description: req.description,
        }
    }
}

/// Query string for `GET /api/sweets/search`.
///
/// Empty values (`?minPrice=`) count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max_price: Option<f64>,
}

impl SearchParams {
    /// Resolve the single filter these parameters select.
    pub fn filter(&self) -> SweetFilter {
        SweetFilter::from_params(
            self.name.as_deref(),
            self.category.as_deref(),
            self.min_price,
            self.max_price,
        )
    }
}

fn validate_email_trimmed(email: &str) -> Result<(), ValidationError> {
    if email.trim().validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Email must be valid".into()))
    }
}

fn empty_string_as_none<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
