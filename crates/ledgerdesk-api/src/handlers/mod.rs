//! HTTP request handlers.

pub mod auth;
pub mod health;
pub mod staff;
pub mod user;
