//! [`UserStore`](crate::store::UserStore) implementations.

pub mod memory;
pub mod user;
