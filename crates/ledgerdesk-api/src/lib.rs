//! # ledgerdesk-api
//!
//! HTTP API layer for LedgerDesk built on Axum.
//!
//! Provides the REST endpoints, the authentication extractors that run the
//! access chain, middleware (CORS, request logging), DTOs, and the mapping
//! from [`AppError`](ledgerdesk_core::AppError) to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
