//! Account management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use ledgerdesk_auth::{PasswordHasher, TokenCodec};
use ledgerdesk_core::config::AppConfig;
use ledgerdesk_core::error::AppError;
use ledgerdesk_core::types::PageRequest;
use ledgerdesk_database::DatabasePool;
use ledgerdesk_entity::user::{User, UserRole};
use ledgerdesk_service::{AccountService, Registration};

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
    /// Create an account with any role
    Create {
        /// Login email
        #[arg(long)]
        email: String,
        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Given name
        #[arg(long)]
        first_name: String,
        /// Family name
        #[arg(long)]
        last_name: String,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// Role: admin, staff or client
        #[arg(long, default_value = "client")]
        role: String,
    },
    /// List accounts, newest first
    List {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Accounts per page
        #[arg(long, default_value_t = 50)]
        per_page: u64,
    },
    /// Enable an account
    Enable {
        /// Login email
        email: String,
    },
    /// Disable an account
    Disable {
        /// Login email
        email: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: i64,
    /// Email
    email: String,
    /// Full name
    name: String,
    /// Role
    role: String,
    /// Active flag
    active: bool,
    /// Created at
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.into_inner(),
            email: u.email.clone(),
            name: u.full_name(),
            role: u.role.to_string(),
            active: u.is_active,
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn account_service(config: &AppConfig, pool: &DatabasePool) -> Result<AccountService, AppError> {
    Ok(AccountService::new(
        Arc::new(pool.users()),
        Arc::new(PasswordHasher::new(&config.auth)?),
        Arc::new(TokenCodec::new(&config.auth)?),
    ))
}

fn prompt_password() -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let accounts = account_service(&config, &pool)?;

    match &args.command {
        UserCommand::Create {
            email,
            password,
            first_name,
            last_name,
            phone,
            role,
        } => {
            let role: UserRole = role.parse()?;
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password()?,
            };

            let user = accounts
                .create_account(
                    Registration {
                        email: email.clone(),
                        password,
                        first_name: first_name.clone(),
                        last_name: last_name.clone(),
                        phone: phone.clone(),
                    },
                    role,
                )
                .await?;

            output::print_item(&UserRow::from(&user), format);
            output::print_success(&format!("Account '{}' created as {}", user.email, user.role));
        }
        UserCommand::List { page, per_page } => {
            let page = accounts.list(PageRequest::new(*page, *per_page)).await?;
            let rows: Vec<UserRow> = page.items.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                println!(
                    "Page {}/{} ({} accounts)",
                    page.page, page.total_pages, page.total_items
                );
            }
        }
        UserCommand::Enable { email } => {
            let user = accounts.set_active_by_email(email, true).await?;
            output::print_success(&format!("Account '{}' enabled", user.email));
        }
        UserCommand::Disable { email } => {
            let user = accounts.set_active_by_email(email, false).await?;
            output::print_success(&format!("Account '{}' disabled", user.email));
        }
    }

    pool.close().await;
    Ok(())
}
