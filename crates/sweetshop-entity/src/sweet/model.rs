//! Sweet entity model and catalog search filter.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sweetshop_core::types::SweetId;

/// An item in the shop catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Sweet {
    /// Unique sweet identifier.
    pub id: SweetId,
    /// Display name.
    pub name: String,
    /// Free-form category, e.g. "Indian" or "Chocolate".
    pub category: String,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub quantity: i32,
    /// Product image URL.
    pub image_url: Option<String>,
    /// Long description.
    pub description: Option<String>,
}

impl Sweet {
    /// Whether at least one unit can be purchased.
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Editable sweet fields, used for both creation and full updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSweet {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl NewSweet {
    /// Materialize a row with the given identifier.
    pub fn into_sweet(self, id: SweetId) -> Sweet {
        Sweet {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
            image_url: self.image_url,
            description: self.description,
        }
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// A catalog search. Exactly one criterion applies at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum SweetFilter {
    /// Case-insensitive substring match on the name.
    Name(String),
    /// Case-insensitive exact match on the category.
    Category(String),
    /// Inclusive price range.
    Price(PriceRange),
    /// No filtering.
    All,
}

impl SweetFilter {
    /// Pick the filter from optional query parameters.
    ///
    /// Precedence is name, then category, then a price range (only when
    /// both bounds are given), then everything. Blank strings count as
    /// absent.
    pub fn from_params(
        name: Option<&str>,
        category: Option<&str>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Self {
        fn present(s: Option<&str>) -> Option<&str> {
            s.map(str::trim).filter(|s| !s.is_empty())
        }

        if let Some(name) = present(name) {
            return Self::Name(name.to_string());
        }
        if let Some(category) = present(category) {
            return Self::Category(category.to_string());
        }
        match (min_price, max_price) {
            (Some(min), Some(max)) => Self::Price(PriceRange { min, max }),
            _ => Self::All,
        }
    }

    /// Whether `sweet` satisfies this filter.
    pub fn matches(&self, sweet: &Sweet) -> bool {
        match self {
            Self::Name(needle) => sweet.name.to_lowercase().contains(&needle.to_lowercase()),
            Self::Category(category) => sweet.category.to_lowercase() == category.to_lowercase(),
            Self::Price(range) => sweet.price >= range.min && sweet.price <= range.max,
            Self::All => true,
        }
    }
}
