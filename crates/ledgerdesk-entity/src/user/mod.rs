//! User account entities.

pub mod model;
pub mod role;

pub use model::{NewUser, ProfileUpdate, User};
pub use role::UserRole;
