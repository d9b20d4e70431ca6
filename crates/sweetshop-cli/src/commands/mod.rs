//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use sweetshop_core::config::AppConfig;
use sweetshop_core::error::AppError;
use sweetshop_database::connection::DatabasePool;

/// Sweet Shop backend: server and operator tools
#[derive(Debug, Parser)]
#[command(name = "sweetshop", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and environment overlays
    #[arg(long, default_value = "config", global = true)]
    pub config_dir: String,

    /// Environment overlay to apply (`{config_dir}/{env}.toml`)
    #[arg(long, env = "SWEETSHOP_ENV", default_value = "development", global = true)]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run migrations and start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// Account management
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config_dir, &self.env)?;

        match &self.command {
            Commands::Serve(args) => {
                init_logging(&config, &config.logging.level);
                serve::execute(args, config).await
            }
            Commands::Migrate => {
                init_logging(&config, "warn");
                migrate::execute(&config).await
            }
            Commands::User(args) => {
                init_logging(&config, "warn");
                user::execute(args, &config).await
            }
        }
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over `default_level`.
fn init_logging(config: &AppConfig, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if config.logging.format == "json" {
        fmt().json().with_env_filter(filter).with_target(true).init();
    } else {
        fmt().with_env_filter(filter).with_target(false).init();
    }
}

/// Helper: connect to the configured database
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
