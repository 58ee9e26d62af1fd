//! Start the LedgerDesk server.

use std::sync::Arc;

use clap::Args;

use ledgerdesk_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip running database migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting LedgerDesk server...");
    println!("  Address: {}", config.server.bind_address());

    let pool = super::create_db_pool(&config).await?;

    if args.no_migrate {
        pool.check_schema().await?;
    } else {
        println!("Running database migrations...");
        pool.migrate().await?;
        println!("  Migrations applied successfully.");
    }

    let users = Arc::new(pool.users());
    let result = ledgerdesk_api::run_server(config, users).await;

    pool.close().await;
    result
}
