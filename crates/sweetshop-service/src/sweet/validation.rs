//! Field rules for catalog entries.

use serde_json::{Map, Value, json};

use sweetshop_core::error::AppError;
use sweetshop_entity::sweet::NewSweet;

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Check a sweet's editable fields, collecting every violation.
pub fn validate_sweet(data: &NewSweet) -> Result<(), AppError> {
    let mut errors = Map::new();

    if data.name.trim().is_empty() {
        errors.insert("name".into(), json!(["Name is required"]));
    }
    if data.category.trim().is_empty() {
        errors.insert("category".into(), json!(["Category is required"]));
    }
    if !(data.price.is_finite() && data.price > 0.0) {
        errors.insert("price".into(), json!(["Price must be greater than 0"]));
    }
    if data.quantity < 0 {
        errors.insert("quantity".into(), json!(["Quantity cannot be negative"]));
    }
    if let Some(description) = &data.description {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.insert(
                "description".into(),
                json!([format!(
                    "Description must be at most {MAX_DESCRIPTION_CHARS} characters"
                )]),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Validation failed").with_details(Value::Object(errors)))
    }
}
