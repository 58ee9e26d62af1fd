//! # ledgerdesk-auth
//!
//! Authentication and authorization core for LedgerDesk.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: access/refresh token issuance and type-checked verification
//! - `identity`: resolves a bearer token to an active account
//! - `access`: the authenticated → staff → admin check chain

pub mod access;
pub mod identity;
pub mod jwt;
pub mod password;

pub use access::AccessChain;
pub use identity::IdentityResolver;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenCodec, TokenError, TokenPair, TokenType};
pub use password::PasswordHasher;
