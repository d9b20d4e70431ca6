//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use sweetshop_core::config::DatabaseConfig;
use sweetshop_core::error::{AppError, ErrorKind};

/// Shared handle to the shop database.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool using the configured limits and wait for the first connection.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        if config.url.is_empty() {
            return Err(AppError::configuration("database.url is not set"));
        }

        info!(
            url = %redact_url(&config.url),
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Borrow the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip a trivial query.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Database ping failed", e))
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Replace the password in a connection URL with `****` for logging.
fn redact_url(url: &str) -> String {
    let Some(at) = url.find('@') else {
        return url.to_string();
    };
    let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    match url[..at].rfind(':') {
        Some(colon) if colon > scheme_end => format!("{}:****{}", &url[..colon], &url[at..]),
        _ => url.to_string(),
    }
}
