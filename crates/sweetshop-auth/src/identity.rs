//! Request-scoped authenticated identity.

use serde::{Deserialize, Serialize};

use sweetshop_entity::user::UserRole;

use crate::jwt::Claims;

/// The caller behind a verified token.
///
/// Lives for a single request. The role is the one embedded in the token
/// at issue time, not the current stored role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub role: UserRole,
}

impl Identity {
    pub fn new(email: impl Into<String>, role: UserRole) -> Self {
        Self {
            email: email.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.sub,
            role: claims.role,
        }
    }
}
