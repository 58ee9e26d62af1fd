//! JWT token validation.

use std::fmt;

use jsonwebtoken::{DecodingKey, Validation, decode};

use ledgerdesk_core::config::AuthConfig;
use ledgerdesk_core::error::AppError;

use super::claims::{Claims, TokenType};
use super::error::TokenError;
use super::signing_algorithm;

/// Validates tokens: signature, algorithm, expiry, and type.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = signing_algorithm(&config.algorithm)?;

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        })
    }

    /// Decodes and validates a token of the expected type.
    ///
    /// Fails closed: malformed input, a bad signature, a foreign algorithm,
    /// an expired `exp`, or a type mismatch all yield an error and never a
    /// partially trusted claim set.
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        if claims.token_type != expected {
            return Err(TokenError::WrongType {
                expected,
                found: claims.token_type,
            });
        }

        Ok(claims)
    }

    /// Shorthand for `verify(token, TokenType::Access)`.
    pub fn verify_access(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token, TokenType::Access)
    }

    /// Shorthand for `verify(token, TokenType::Refresh)`.
    pub fn verify_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token, TokenType::Refresh)
    }
}
