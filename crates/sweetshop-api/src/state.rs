//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use sweetshop_auth::jwt::{JwtDecoder, JwtEncoder, SigningKey};
use sweetshop_auth::password::{PasswordHasher, PasswordValidator};
use sweetshop_core::config::AppConfig;
use sweetshop_database::store::{SweetStore, UserStore};
use sweetshop_service::{SweetService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token verifier used by the auth gate
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration and login
    pub user_service: Arc<UserService>,
    /// Catalog operations
    pub sweet_service: Arc<SweetService>,
    /// Process start, for the health endpoint
    pub started_at: Instant,
}

impl AppState {
    /// Wire services over the given stores, signing tokens with `key`.
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        sweets: Arc<dyn SweetStore>,
        key: &SigningKey,
    ) -> Self {
        let encoder = Arc::new(JwtEncoder::new(key, config.auth.token_ttl_minutes));
        let user_service = UserService::new(
            users,
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config.auth)),
            encoder,
        );

        Self {
            jwt_decoder: Arc::new(JwtDecoder::new(key)),
            user_service: Arc::new(user_service),
            sweet_service: Arc::new(SweetService::new(sweets)),
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
