//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tracing::warn;

use sweetshop_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// Browsers refuse a literal `*` together with credentials, so a wildcard
/// in that case mirrors the request's origin (or headers) instead.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let wildcard = |values: &[String]| values.iter().any(|v| v == "*");
    let mut layer = CorsLayer::new();

    // Origins
    if wildcard(&config.allowed_origins) {
        if config.allow_credentials {
            warn!("CORS allows any origin with credentials; mirroring request origin");
            layer = layer.allow_origin(AllowOrigin::mirror_request());
        } else {
            layer = layer.allow_origin(Any);
        }
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    // Methods
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    // Headers
    if wildcard(&config.allowed_headers) {
        if config.allow_credentials {
            layer = layer.allow_headers(AllowHeaders::mirror_request());
        } else {
            layer = layer.allow_headers(Any);
        }
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        layer = layer.allow_headers(headers);
    }

    layer
        .allow_credentials(config.allow_credentials)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
