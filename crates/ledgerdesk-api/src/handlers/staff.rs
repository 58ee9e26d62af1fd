//! Staff-tier endpoints.

use axum::Json;

use crate::dto::response::StaffPingResponse;
use crate::extractors::StaffUser;

/// GET /api/v1/staff/ping
pub async fn ping(StaffUser(user): StaffUser) -> Json<StaffPingResponse> {
    Json(StaffPingResponse {
        user_id: user.id,
        role: user.role,
    })
}
