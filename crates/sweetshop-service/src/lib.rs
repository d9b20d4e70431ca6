//! # sweetshop-service
//!
//! Business logic for the Sweet Shop backend. Each service is written
//! against the store traits from `sweetshop-database` and receives the
//! caller's identity explicitly; role requirements are checked before any
//! side effect.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod sweet;
pub mod user;

pub use sweet::SweetService;
pub use user::{LoginResult, RegisterInput, UserService};
