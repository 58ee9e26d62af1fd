//! # ledgerdesk-database
//!
//! Account persistence for LedgerDesk. The authentication core only needs
//! [`UserStore`]; this crate provides a PostgreSQL implementation
//! ([`UserRepository`]) and an in-memory one ([`MemoryUserRepository`])
//! used by tests and local development.

pub mod connection;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::memory::MemoryUserRepository;
pub use repositories::user::UserRepository;
pub use store::UserStore;
