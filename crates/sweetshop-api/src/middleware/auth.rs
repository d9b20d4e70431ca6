//! Auth gate: turns a bearer token into a request-scoped identity.
//!
//! The gate never rejects. A missing, malformed, wrongly-signed or expired
//! token leaves the request anonymous; the service guards decide whether
//! that matters.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use tracing::debug;

use crate::state::AppState;

/// Runs once per request before routing.
pub async fn auth_gate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    if should_bypass(request.method(), request.uri().path()) {
        return next.run(request).await;
    }

    if let Some(token) = bearer_token(request.headers()) {
        match state.jwt_decoder.verify(&token) {
            Ok(identity) => {
                request.extensions_mut().insert(identity);
            }
            Err(e) => {
                debug!(path = %request.uri().path(), error = %e, "Ignoring invalid bearer token");
            }
        }
    }

    next.run(request).await
}

/// Requests that proceed anonymously without the header being read:
/// CORS pre-flight, everything under `/api/auth`, and catalog reads.
pub fn should_bypass(method: &Method, path: &str) -> bool {
    if method == Method::OPTIONS {
        return true;
    }
    if under(path, "/api/auth") {
        return true;
    }
    method == Method::GET && under(path, "/api/sweets")
}

fn under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// The token from `Authorization: Bearer <token>`, if well-formed.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
}
