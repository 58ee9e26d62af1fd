//! LedgerDesk server.
//!
//! Loads configuration, initializes logging, connects to PostgreSQL, applies
//! migrations, and serves the HTTP API until Ctrl+C. `LEDGERDESK_ENV` picks
//! the configuration overlay (default `development`).

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use ledgerdesk_core::config::{AppConfig, ENVIRONMENT_VAR};
use ledgerdesk_core::error::AppError;
use ledgerdesk_database::DatabasePool;

#[tokio::main]
async fn main() {
    let env = std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Starting LedgerDesk"
    );

    let pool = DatabasePool::connect(&config.database).await?;
    pool.migrate().await?;

    let users = Arc::new(pool.users());
    let result = ledgerdesk_api::run_server(config, users).await;

    pool.close().await;
    result
}
