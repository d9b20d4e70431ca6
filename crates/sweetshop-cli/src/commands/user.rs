//! Account management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use sweetshop_auth::jwt::{JwtEncoder, SigningKey};
use sweetshop_auth::password::{PasswordHasher, PasswordValidator};
use sweetshop_core::config::AppConfig;
use sweetshop_core::error::AppError;
use sweetshop_database::repositories::UserRepository;
use sweetshop_entity::user::User;
use sweetshop_service::{RegisterInput, UserService};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create an ADMIN account
    CreateAdmin {
        /// Display name
        #[arg(long)]
        username: String,
        /// Login email
        #[arg(long)]
        email: String,
        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// List all accounts
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    role: String,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.get(),
            username: u.username.clone(),
            email: u.email.clone(),
            role: u.role.to_string(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(args: &UserArgs, config: &AppConfig) -> Result<(), AppError> {
    let db = super::connect(config).await?;
    let service = user_service(config, UserRepository::new(db.pool().clone()));

    match &args.command {
        UserCommand::CreateAdmin {
            username,
            email,
            password,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password()?,
            };

            let user = service
                .create_admin(RegisterInput {
                    username: username.clone(),
                    email: email.clone(),
                    password,
                })
                .await?;

            output::print_success(&format!("Admin '{}' created", user.email));
            output::print_kv("ID", &user.id.to_string());
            output::print_kv("Username", &user.username);
        }
        UserCommand::List { format } => {
            let users = service.list_users().await?;
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            output::print_list(&rows, *format);
        }
    }

    db.close().await;
    Ok(())
}

fn user_service(config: &AppConfig, repo: UserRepository) -> UserService {
    // Tokens are never issued here, so a throwaway key is enough.
    let encoder = JwtEncoder::new(&SigningKey::generate(), config.auth.token_ttl_minutes);
    UserService::new(
        Arc::new(repo),
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&config.auth)),
        Arc::new(encoder),
    )
}

fn prompt_password() -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
