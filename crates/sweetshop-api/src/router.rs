//! Route definitions for the Sweet Shop HTTP API.
//!
//! All routes are mounted under `/api`. The auth gate wraps the whole
//! router so it sees full request paths; CORS is the outermost layer so
//! pre-flight requests are answered before anything else runs.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(sweet_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_gate,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(DefaultBodyLimit::max(state.config.server.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Registration and login (public).
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// Catalog: public reads, admin writes, authenticated purchase.
fn sweet_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sweets",
            get(handlers::sweet::list).post(handlers::sweet::create),
        )
        .route("/sweets/search", get(handlers::sweet::search))
        .route(
            "/sweets/{id}",
            put(handlers::sweet::update).delete(handlers::sweet::remove),
        )
        .route("/sweets/{id}/purchase", put(handlers::sweet::purchase))
}

/// Health check (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
