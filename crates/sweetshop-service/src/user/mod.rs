//! Account registration, login, and operator account management.

pub mod service;

pub use service::{LoginResult, RegisterInput, UserService, normalize_email};
