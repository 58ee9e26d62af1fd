//! Account use cases shared by the HTTP API and the operator CLI.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use ledgerdesk_auth::jwt::{ExtraClaims, TokenCodec, TokenPair, TokenType};
use ledgerdesk_auth::password::PasswordHasher;
use ledgerdesk_core::error::AppError;
use ledgerdesk_core::result::AppResult;
use ledgerdesk_core::types::{PageRequest, PageResponse, UserId};
use ledgerdesk_database::UserStore;
use ledgerdesk_entity::user::{NewUser, ProfileUpdate, User, UserRole};

use super::input::{
    AccountChanges, Credentials, Registration, check_profile, normalize_email,
};

/// Same message for unknown email and wrong password.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Tokens issued to a freshly authenticated account.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Access + refresh pair.
    pub tokens: TokenPair,
    /// The account the tokens belong to.
    pub user: User,
}

/// Orchestrates the account store, password hasher and token codec.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    codec: Arc<TokenCodec>,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService")
            .field("hasher", &self.hasher)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        codec: Arc<TokenCodec>,
    ) -> Self {
        Self {
            users,
            hasher,
            codec,
        }
    }

    /// Self-service registration. The new account is always a client.
    pub async fn register(&self, input: Registration) -> AppResult<AuthSession> {
        let user = self.create_account(input, UserRole::Client).await?;
        self.session_for(user)
    }

    /// Creates an account with an explicit role.
    ///
    /// Used by operator tooling; the public API only reaches this through
    /// [`register`](Self::register).
    pub async fn create_account(&self, input: Registration, role: UserRole) -> AppResult<User> {
        input.check()?;
        let email = normalize_email(&input.email);

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hash(input.password).await?;
        let user = self
            .users
            .create(&NewUser {
                email,
                password_hash,
                first_name: input.first_name.trim().to_string(),
                last_name: input.last_name.trim().to_string(),
                phone: input.phone.filter(|p| !p.trim().is_empty()),
                role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "Account created");
        Ok(user)
    }

    /// Email + password login.
    pub async fn login(&self, credentials: Credentials) -> AppResult<AuthSession> {
        let email = normalize_email(&credentials.email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!("Login attempt for unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self
            .verify(credentials.password, user.password_hash.clone())
            .await?
        {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        if !user.is_active {
            warn!(user_id = %user.id, "Login refused for inactive account");
            return Err(AppError::unauthorized("Inactive user"));
        }

        info!(user_id = %user.id, "User logged in");
        self.session_for(user)
    }

    /// Exchanges a refresh token for a fresh token pair.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthSession> {
        let claims = self
            .codec
            .verify(refresh_token, TokenType::Refresh)
            .map_err(|e| {
                warn!(error = %e, "Refresh token rejected");
                AppError::unauthorized("Invalid refresh token")
            })?;

        let user_id = claims
            .user_id()
            .ok_or_else(|| AppError::unauthorized("Invalid refresh token"))?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| AppError::unauthorized("User not found or inactive"))?;

        info!(user_id = %user.id, "Tokens refreshed");
        self.session_for(user)
    }

    /// Fetches one account.
    pub async fn get(&self, id: UserId) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Lists accounts, newest first.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<User>> {
        self.users.list(&page).await
    }

    /// Updates the caller's own profile fields.
    pub async fn update_profile(&self, id: UserId, update: ProfileUpdate) -> AppResult<User> {
        check_profile(&update)?;
        if update.is_empty() {
            return self.get(id).await;
        }

        let update = ProfileUpdate {
            first_name: update.first_name.map(|s| s.trim().to_string()),
            last_name: update.last_name.map(|s| s.trim().to_string()),
            phone: update.phone.map(|s| s.trim().to_string()),
        };

        let user = self
            .users
            .update_profile(id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %id, "Profile updated");
        Ok(user)
    }

    /// Changes another account's role and/or active flag.
    ///
    /// An administrator cannot demote or deactivate their own account.
    pub async fn admin_update(
        &self,
        actor: &User,
        id: UserId,
        changes: AccountChanges,
    ) -> AppResult<User> {
        if changes.is_empty() {
            return Err(AppError::validation("No changes requested"));
        }

        if actor.id == id {
            let demotes = changes.role.is_some_and(|role| !role.is_admin());
            let deactivates = changes.is_active == Some(false);
            if demotes || deactivates {
                return Err(AppError::validation(
                    "Administrators cannot demote or deactivate their own account",
                ));
            }
        }

        let user = self
            .users
            .update_access(id, changes.role, changes.is_active)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(
            actor_id = %actor.id,
            user_id = %id,
            role = ?changes.role,
            is_active = ?changes.is_active,
            "Account updated by administrator"
        );
        Ok(user)
    }

    /// Enables or disables an account looked up by email.
    pub async fn set_active_by_email(&self, email: &str, active: bool) -> AppResult<User> {
        let email = normalize_email(email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No account for '{email}'")))?;

        let user = self
            .users
            .set_active(user.id, active)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %user.id, is_active = active, "Account active flag changed");
        Ok(user)
    }

    fn session_for(&self, user: User) -> AppResult<AuthSession> {
        let mut extra = ExtraClaims::new();
        extra.insert("role".to_string(), Value::from(user.role.as_str()));

        let tokens = self.codec.encoder().issue_pair(user.id, Some(extra))?;
        Ok(AuthSession { tokens, user })
    }

    async fn hash(&self, password: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    async fn verify(&self, password: String, hash: String) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
    }
}
