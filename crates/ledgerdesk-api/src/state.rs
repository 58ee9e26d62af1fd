//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use tracing::warn;

use ledgerdesk_auth::{AccessChain, IdentityResolver, PasswordHasher, TokenCodec};
use ledgerdesk_core::config::AppConfig;
use ledgerdesk_core::error::AppError;
use ledgerdesk_core::result::AppResult;
use ledgerdesk_database::UserStore;
use ledgerdesk_service::AccountService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Authenticated → staff → admin checks
    pub access: AccessChain,
    /// Account use cases
    pub accounts: AccountService,
}

impl AppState {
    /// Wires the auth components and services over an account store.
    ///
    /// Refuses the development token secret in production.
    pub fn new(config: AppConfig, users: Arc<dyn UserStore>) -> AppResult<Self> {
        check_token_secret(&config)?;

        let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let codec = Arc::new(TokenCodec::new(&config.auth)?);

        let resolver = IdentityResolver::new(Arc::new(codec.decoder().clone()), Arc::clone(&users));
        let access = AccessChain::new(resolver);
        let accounts = AccountService::new(users, hasher, codec);

        Ok(Self {
            config: Arc::new(config),
            access,
            accounts,
        })
    }
}

fn check_token_secret(config: &AppConfig) -> AppResult<()> {
    if !config.auth.uses_development_secret() {
        return Ok(());
    }
    if config.is_production() {
        return Err(AppError::configuration(
            "The development token secret must not be used in production; set LEDGERDESK_AUTH__SECRET_KEY",
        ));
    }
    warn!(environment = %config.environment, "Using the development token secret");
    Ok(())
}
