//! In-memory user repository for tests and local development.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use ledgerdesk_core::error::AppError;
use ledgerdesk_core::result::AppResult;
use ledgerdesk_core::types::{PageRequest, PageResponse, UserId};
use ledgerdesk_entity::user::{NewUser, ProfileUpdate, User, UserRole};

use crate::store::UserStore;

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    users: BTreeMap<UserId, User>,
}

/// [`UserStore`] held entirely in process memory.
///
/// Identifiers are assigned sequentially from 1. Clones share the same
/// underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed account, keeping its identifier.
    ///
    /// Replaces any account already stored under the same id.
    pub async fn insert(&self, user: User) {
        let mut inner = self.inner.write().await;
        inner.last_id = inner.last_id.max(user.id.into_inner());
        inner.users.insert(user.id, user);
    }

    /// Remove an account, returning it if it existed.
    pub async fn remove(&self, id: UserId) -> Option<User> {
        self.inner.write().await.users.remove(&id)
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// Whether no accounts are stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }

    async fn modify(
        &self,
        id: UserId,
        apply: impl FnOnce(&mut User),
    ) -> AppResult<Option<User>> {
        let mut inner = self.inner.write().await;
        Ok(inner.users.get_mut(&id).map(|user| {
            apply(user);
            user.updated_at = Some(Utc::now());
            user.clone()
        }))
    }
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        if inner
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AppError::conflict("Email already registered"));
        }

        inner.last_id += 1;
        let id = UserId(inner.last_id);
        let created = User {
            id,
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            role: user.role,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.users.insert(id, created.clone());
        Ok(created)
    }

    async fn update_profile(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> AppResult<Option<User>> {
        self.modify(id, |user| {
            if let Some(first_name) = &update.first_name {
                user.first_name = first_name.clone();
            }
            if let Some(last_name) = &update.last_name {
                user.last_name = last_name.clone();
            }
            if let Some(phone) = &update.phone {
                user.phone = Some(phone.clone());
            }
        })
        .await
    }

    async fn update_access(
        &self,
        id: UserId,
        role: Option<UserRole>,
        is_active: Option<bool>,
    ) -> AppResult<Option<User>> {
        self.modify(id, |user| {
            if let Some(role) = role {
                user.role = role;
            }
            if let Some(active) = is_active {
                user.is_active = active;
            }
        })
        .await
    }

    async fn set_active(&self, id: UserId, active: bool) -> AppResult<Option<User>> {
        self.modify(id, |user| user.is_active = active).await
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let inner = self.inner.read().await;
        let mut users: Vec<&User> = inner.users.values().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let items = users
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(PageResponse::new(items, page, inner.users.len() as u64))
    }
}
