//! Bearer token to account resolution.

pub mod resolver;

pub use resolver::IdentityResolver;
