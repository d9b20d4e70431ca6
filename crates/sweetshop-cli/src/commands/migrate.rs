//! Database migration command.

use sweetshop_core::config::AppConfig;
use sweetshop_core::error::AppError;
use sweetshop_database::migration::run_migrations;

use crate::output;

/// Apply every pending migration.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let db = super::connect(config).await?;

    println!("Running database migrations...");
    run_migrations(db.pool()).await?;
    db.close().await;

    output::print_success("All migrations applied successfully.");
    Ok(())
}
