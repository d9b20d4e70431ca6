//! Start the Sweet Shop server.

use clap::Args;
use tracing::info;

use sweetshop_core::config::AppConfig;
use sweetshop_core::error::AppError;
use sweetshop_database::migration::run_migrations;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Skip running database migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    let db = super::connect(&config).await?;

    if args.no_migrate {
        info!("Skipping database migrations");
    } else {
        run_migrations(db.pool()).await?;
    }

    sweetshop_api::run_server(config, db).await
}
