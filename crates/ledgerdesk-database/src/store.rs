//! The persistence seam the rest of the workspace depends on.

use async_trait::async_trait;

use ledgerdesk_core::result::AppResult;
use ledgerdesk_core::types::{PageRequest, PageResponse, UserId};
use ledgerdesk_entity::user::{NewUser, ProfileUpdate, User, UserRole};

/// Account storage.
///
/// Emails are unique and compared case-insensitively. Mutators return
/// `Ok(None)` when the target account does not exist.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Fetch one account by identifier.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Fetch one account by login email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new account. A duplicate email is a `Conflict` error.
    async fn create(&self, user: &NewUser) -> AppResult<User>;

    /// Apply self-service profile changes.
    async fn update_profile(&self, id: UserId, update: &ProfileUpdate)
    -> AppResult<Option<User>>;

    /// Change an account's role and/or active flag in one write. `None`
    /// leaves a field untouched.
    async fn update_access(
        &self,
        id: UserId,
        role: Option<UserRole>,
        is_active: Option<bool>,
    ) -> AppResult<Option<User>>;

    /// Activate or deactivate an account.
    async fn set_active(&self, id: UserId, active: bool) -> AppResult<Option<User>>;

    /// List accounts, newest first.
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<User>>;
}
