//! Catalog browsing, administration, and purchase.

pub mod service;
pub mod validation;

pub use service::SweetService;
pub use validation::validate_sweet;
