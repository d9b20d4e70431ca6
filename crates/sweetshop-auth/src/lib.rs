//! # sweetshop-auth
//!
//! Authentication and authorization primitives for the Sweet Shop backend.
//!
//! ## Modules
//!
//! - `jwt`: signing key management, token issuance and verification
//! - `password`: Argon2id password hashing and policy enforcement
//! - `identity`: the request-scoped authenticated identity
//! - `rbac`: guards checked at the top of protected operations

pub mod identity;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use identity::Identity;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, SigningKey};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{require_admin, require_authenticated};
