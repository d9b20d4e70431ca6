//! Registration and login.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use sweetshop_auth::jwt::JwtEncoder;
use sweetshop_auth::password::{PasswordHasher, PasswordValidator};
use sweetshop_core::error::AppError;
use sweetshop_core::result::AppResult;
use sweetshop_database::store::{DUPLICATE_EMAIL, UserStore};
use sweetshop_entity::user::{CreateUser, User, UserRole};

/// Same message for an unknown email and a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Fields supplied when creating an account.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A successful login: a fresh token and the account's public fields.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}

/// Handles account creation and credential checks.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Credential store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a self-service account. The role is always `USER`.
    pub async fn register(&self, input: RegisterInput) -> AppResult<User> {
        let user = self.create_account(input, UserRole::User).await?;
        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Creates an `ADMIN` account. Only reachable from the operator CLI.
    pub async fn create_admin(&self, input: RegisterInput) -> AppResult<User> {
        let user = self.create_account(input, UserRole::Admin).await?;
        warn!(user_id = %user.id, "Admin account created");
        Ok(user)
    }

    /// Checks credentials and issues a token carrying the stored role.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        let email = normalize_email(email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            info!("Login failed: unknown account");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            info!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let token = self.encoder.issue(&user.email, user.role)?;
        info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginResult { token, user })
    }

    /// All accounts, ordered by id.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn create_account(&self, input: RegisterInput, role: UserRole) -> AppResult<User> {
        let username = input.username.trim().to_string();
        let email = normalize_email(&input.email);

        self.validator
            .validate(&input.password, &[username.as_str(), email.as_str()])?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(DUPLICATE_EMAIL));
        }

        let password_hash = self.hasher.hash(&input.password)?;

        self.users
            .create(&CreateUser {
                username,
                email,
                password_hash,
                role,
            })
            .await
    }
}

/// Trim and lowercase an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
