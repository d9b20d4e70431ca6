//! Application builder: wires stores, services, and the router into a server.

use std::sync::Arc;

use axum::Router;
use tracing::{error, info};

use sweetshop_auth::jwt::SigningKey;
use sweetshop_core::config::AppConfig;
use sweetshop_core::error::AppError;
use sweetshop_core::result::AppResult;
use sweetshop_database::connection::DatabasePool;
use sweetshop_database::repositories::{SweetRepository, UserRepository};
use sweetshop_database::store::{SweetStore, UserStore};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Resolve the signing key and wire services over the given stores.
pub fn build_state(
    config: AppConfig,
    users: Arc<dyn UserStore>,
    sweets: Arc<dyn SweetStore>,
) -> AppResult<AppState> {
    let key = SigningKey::from_config(&config.auth)?;
    Ok(AppState::new(config, users, sweets, &key))
}

/// Runs the server against PostgreSQL until Ctrl+C.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> AppResult<()> {
    info!("Starting Sweet Shop server");

    let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(db.pool().clone()));
    let sweets: Arc<dyn SweetStore> = Arc::new(SweetRepository::new(db.pool().clone()));

    let addr = config.server.bind_address();
    let app = build_app(build_state(config, users, sweets)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Sweet Shop server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
