//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sweetshop_core::types::UserId;

use super::role::UserRole;

/// A registered shop account.
///
/// The password hash is never serialized, so a `User` can be returned
/// from the API as-is.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name chosen at registration.
    pub username: String,
    /// Login email, unique case-insensitively.
    pub email: String,
    /// Argon2id password hash in PHC string format.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// User role.
    pub role: UserRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Normalized (trimmed, lowercase) email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
}
