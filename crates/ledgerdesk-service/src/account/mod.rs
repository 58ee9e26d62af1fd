//! Account lifecycle: registration, login, refresh, and updates.

pub mod input;
pub mod service;

pub use input::{AccountChanges, Credentials, Registration};
pub use service::{AccountService, AuthSession};
