//! The authenticated → staff → admin check chain.
//!
//! Role checks run only after authentication succeeds, so a caller that
//! fails to authenticate always gets `Unauthorized` before any role is
//! considered.

use ledgerdesk_core::error::AppError;
use ledgerdesk_core::result::AppResult;
use ledgerdesk_entity::user::User;

use crate::identity::IdentityResolver;

/// Layered access checks over an [`IdentityResolver`].
#[derive(Debug, Clone)]
pub struct AccessChain {
    resolver: IdentityResolver,
}

impl AccessChain {
    /// Wraps a resolver.
    pub fn new(resolver: IdentityResolver) -> Self {
        Self { resolver }
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    /// Any active account.
    pub async fn require_authenticated(&self, token: &str) -> AppResult<User> {
        self.resolver.resolve_current(token).await
    }

    /// Staff or admin.
    pub async fn require_staff(&self, token: &str) -> AppResult<User> {
        let user = self.require_authenticated(token).await?;
        if !user.role.is_staff_or_admin() {
            return Err(AppError::forbidden("Staff access required"));
        }
        Ok(user)
    }

    /// Admin only.
    pub async fn require_admin(&self, token: &str) -> AppResult<User> {
        let user = self.require_authenticated(token).await?;
        if !user.role.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }
        Ok(user)
    }
}
