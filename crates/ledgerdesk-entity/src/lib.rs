//! # ledgerdesk-entity
//!
//! Domain entity models for LedgerDesk. Database entities derive
//! `sqlx::FromRow`; enums map onto PostgreSQL enum types.

pub mod user;
