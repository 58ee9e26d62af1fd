//! Account handlers: self-service profile and admin management.

use axum::Json;
use axum::extract::State;

use ledgerdesk_core::types::UserId;

use crate::dto::request::{UpdateProfileRequest, UpdateUserRequest};
use crate::dto::response::{PaginatedResponse, UserResponse};
use crate::dto::validated;
use crate::error::ApiError;
use crate::extractors::{AdminUser, ApiJson, ApiPath, ApiQuery, CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/v1/users/me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}

/// PATCH /api/v1/users/me
pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let req = validated(req)?;
    let updated = state.accounts.update_profile(user.id, req.into()).await?;
    Ok(Json(updated.into()))
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<PaginatedResponse<UserResponse>>, ApiError> {
    let page = state.accounts.list(params.into_page_request()).await?;
    Ok(Json(page.into()))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.accounts.get(UserId(id)).await?;
    Ok(Json(user.into()))
}

/// PATCH /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .accounts
        .admin_update(&admin, UserId(id), req.into())
        .await?;
    Ok(Json(user.into()))
}
