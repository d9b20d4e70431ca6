//! # sweetshop-api
//!
//! HTTP API layer for the Sweet Shop backend built on Axum.
//!
//! Provides the REST endpoints, the auth gate that turns bearer tokens into
//! a request-scoped identity, CORS and logging middleware, extractors, DTOs,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
