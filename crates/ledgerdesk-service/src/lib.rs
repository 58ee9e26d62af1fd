//! # ledgerdesk-service
//!
//! Account use cases for LedgerDesk. Services orchestrate the account
//! store, the password hasher and the token codec; all dependencies are
//! injected at construction time via `Arc` references.

pub mod account;

pub use account::{AccountChanges, AccountService, AuthSession, Credentials, Registration};
