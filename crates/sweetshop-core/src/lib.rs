//! # sweetshop-core
//!
//! Core crate for the Sweet Shop backend. Contains configuration schemas,
//! typed identifiers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Sweet Shop crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
