//! Catalog entities.

pub mod model;

pub use model::{NewSweet, PriceRange, Sweet, SweetFilter};
