//! Resolves a presented access token to the current, active account.

use std::sync::Arc;

use tracing::debug;

use ledgerdesk_core::error::AppError;
use ledgerdesk_core::result::AppResult;
use ledgerdesk_database::UserStore;
use ledgerdesk_entity::user::User;

use crate::jwt::{JwtDecoder, TokenType};

/// Turns an access token into the account it names.
///
/// The token only proves *who* is calling. Role and active status always
/// come from a fresh store read, so a deactivation or role change takes
/// effect on the very next request.
#[derive(Clone)]
pub struct IdentityResolver {
    decoder: Arc<JwtDecoder>,
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityResolver")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

impl IdentityResolver {
    /// Creates a resolver over the given decoder and account store.
    pub fn new(decoder: Arc<JwtDecoder>, users: Arc<dyn UserStore>) -> Self {
        Self { decoder, users }
    }

    /// Resolves an access token to its active account.
    ///
    /// - invalid, expired or non-access token: `Unauthorized`
    /// - subject that is not an account identifier: `Unauthorized`
    /// - no account with that identifier: `NotFound`
    /// - account deactivated: `Unauthorized`
    pub async fn resolve_current(&self, token: &str) -> AppResult<User> {
        let claims = self
            .decoder
            .verify(token, TokenType::Access)
            .map_err(|e| {
                debug!(error = %e, "Access token rejected");
                AppError::unauthorized("Could not validate credentials")
            })?;

        let user_id = claims.user_id().ok_or_else(|| {
            debug!(sub = %claims.sub, "Token subject is not an account identifier");
            AppError::unauthorized("Could not validate credentials")
        })?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !user.is_active {
            debug!(user_id = %user.id, "Token presented for inactive account");
            return Err(AppError::unauthorized("Inactive user"));
        }

        Ok(user)
    }
}
