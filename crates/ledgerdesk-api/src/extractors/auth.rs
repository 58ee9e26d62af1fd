//! Authentication extractors: pull the bearer token from the Authorization
//! header and run it through the access chain.
//!
//! Handlers pick the tier they need by extractor type:
//! [`CurrentUser`] (any active account), [`StaffUser`] (staff or admin),
//! [`AdminUser`] (admin only).

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use ledgerdesk_core::error::AppError;
use ledgerdesk_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Reads the bearer credential from the request headers.
fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let value = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized("Not authenticated"))?
        .to_str()
        .map_err(|_| AppError::unauthorized("Invalid Authorization header"))?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AppError::unauthorized("Invalid Authorization header format").into());
    }

    Ok(token)
}

/// Any authenticated, active account.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// An active staff member or administrator.
#[derive(Debug, Clone)]
pub struct StaffUser(pub User);

/// An active administrator.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        Ok(Self(state.access.require_authenticated(token).await?))
    }
}

impl FromRequestParts<AppState> for StaffUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        Ok(Self(state.access.require_staff(token).await?))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        Ok(Self(state.access.require_admin(token).await?))
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::Deref for StaffUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::Deref for AdminUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
