//! Custom Axum extractors.

pub mod auth;
pub mod pagination;
pub mod request;

pub use auth::{AdminUser, CurrentUser, StaffUser};
pub use pagination::PaginationParams;
pub use request::{ApiJson, ApiPath, ApiQuery};
