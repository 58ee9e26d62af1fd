//! JWT issuance and verification.
//!
//! Tokens are HMAC-signed with a process-wide secret. Every token carries a
//! `type` claim; verification always states which type it expects, so a
//! refresh token can never stand in for an access token or the reverse.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;

use jsonwebtoken::Algorithm;

use ledgerdesk_core::config::AuthConfig;
use ledgerdesk_core::error::AppError;

pub use claims::{Claims, ExtraClaims, RESERVED_CLAIMS, TokenType};
pub use decoder::JwtDecoder;
pub use encoder::{JwtEncoder, TokenPair};
pub use error::TokenError;

/// Resolves the configured algorithm name. Only the HMAC family works with
/// a shared secret, so anything else is rejected at startup.
pub fn signing_algorithm(name: &str) -> Result<Algorithm, AppError> {
    match name.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::configuration(format!(
            "Unsupported token algorithm '{other}'. Expected one of: HS256, HS384, HS512"
        ))),
    }
}

/// Encoder and decoder built from the same configuration.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenCodec {
    /// Builds both halves, failing on an unusable configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        Ok(Self {
            encoder: JwtEncoder::new(config)?,
            decoder: JwtDecoder::new(config)?,
        })
    }

    /// The issuing half.
    pub fn encoder(&self) -> &JwtEncoder {
        &self.encoder
    }

    /// The verifying half.
    pub fn decoder(&self) -> &JwtDecoder {
        &self.decoder
    }

    /// See [`JwtEncoder::issue_access`].
    pub fn issue_access(
        &self,
        subject: impl std::fmt::Display,
        extra: Option<ExtraClaims>,
    ) -> Result<String, AppError> {
        self.encoder.issue_access(subject, extra)
    }

    /// See [`JwtEncoder::issue_refresh`].
    pub fn issue_refresh(&self, subject: impl std::fmt::Display) -> Result<String, AppError> {
        self.encoder.issue_refresh(subject)
    }

    /// See [`JwtDecoder::verify`].
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, TokenError> {
        self.decoder.verify(token, expected)
    }
}
