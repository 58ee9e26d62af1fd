//! Token verification failures.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use thiserror::Error;

use ledgerdesk_core::error::AppError;

use super::claims::TokenType;

/// Why a token failed verification.
///
/// Every variant means the same thing to callers (no identity can be
/// established); the distinction exists for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The `exp` claim is in the past.
    #[error("token has expired")]
    Expired,
    /// The signature does not match the header and payload.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The header names an algorithm other than the configured one.
    #[error("token algorithm is not accepted")]
    InvalidAlgorithm,
    /// The token is not a well-formed JWT with the expected claims.
    #[error("token is malformed")]
    Malformed,
    /// A well-formed token of the other kind.
    #[error("expected {expected} token, found {found} token")]
    WrongType {
        /// The kind the caller asked for.
        expected: TokenType,
        /// The kind the token carries.
        found: TokenType,
    },
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::ExpiredSignature => Self::Expired,
            JwtErrorKind::InvalidSignature => Self::InvalidSignature,
            JwtErrorKind::InvalidAlgorithm | JwtErrorKind::InvalidAlgorithmName => {
                Self::InvalidAlgorithm
            }
            _ => Self::Malformed,
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::unauthorized(match err {
            TokenError::Expired => "Token has expired",
            _ => "Invalid or expired token",
        })
    }
}
