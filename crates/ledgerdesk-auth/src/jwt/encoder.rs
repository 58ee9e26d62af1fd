//! JWT token creation with configurable signing and TTL.

use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tracing::warn;

use ledgerdesk_core::config::AuthConfig;
use ledgerdesk_core::error::AppError;

use super::claims::{Claims, ExtraClaims, RESERVED_CLAIMS, TokenType};
use super::signing_algorithm;

/// Secrets shorter than this are accepted but logged.
const RECOMMENDED_SECRET_LEN: usize = 32;

/// Creates signed access and refresh tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    header: Header,
    encoding_key: EncodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("algorithm", &self.header.alg)
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

/// Access + refresh tokens returned to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = signing_algorithm(&config.algorithm)?;

        if config.secret_key.is_empty() {
            return Err(AppError::configuration("Token secret key must not be empty"));
        }
        if config.secret_key.len() < RECOMMENDED_SECRET_LEN {
            warn!(
                length = config.secret_key.len(),
                recommended = RECOMMENDED_SECRET_LEN,
                "Token secret key is shorter than recommended"
            );
        }

        let access_ttl = i64::try_from(config.access_ttl_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or_else(|| AppError::configuration("access_ttl_minutes is out of range"))?;
        let refresh_ttl = i64::try_from(config.refresh_ttl_days)
            .ok()
            .and_then(Duration::try_days)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or_else(|| AppError::configuration("refresh_ttl_days is out of range"))?;

        Ok(Self {
            header: Header::new(algorithm),
            encoding_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
            access_ttl,
            refresh_ttl,
        })
    }

    /// Issues an access token for `subject`.
    ///
    /// Extra claims are copied into the payload as informational metadata.
    /// Any extra claim named like a reserved claim (`sub`, `iat`, `exp`,
    /// `type`, or a registered claim such as `aud`) is dropped.
    pub fn issue_access(
        &self,
        subject: impl fmt::Display,
        extra: Option<ExtraClaims>,
    ) -> Result<String, AppError> {
        let mut extra = extra.unwrap_or_default();
        extra.retain(|name, _| {
            let reserved = RESERVED_CLAIMS.contains(&name.as_str());
            if reserved {
                warn!(claim = %name, "Dropping extra claim that shadows a reserved claim");
            }
            !reserved
        });

        self.issue(subject.to_string(), TokenType::Access, self.access_ttl, extra)
    }

    /// Issues a refresh token for `subject`. Refresh tokens carry no extras.
    pub fn issue_refresh(&self, subject: impl fmt::Display) -> Result<String, AppError> {
        self.issue(
            subject.to_string(),
            TokenType::Refresh,
            self.refresh_ttl,
            ExtraClaims::new(),
        )
    }

    /// Issues an access + refresh pair for the same subject.
    pub fn issue_pair(
        &self,
        subject: impl fmt::Display,
        extra: Option<ExtraClaims>,
    ) -> Result<TokenPair, AppError> {
        let subject = subject.to_string();
        Ok(TokenPair {
            access_token: self.issue_access(&subject, extra)?,
            refresh_token: self.issue_refresh(&subject)?,
            token_type: "bearer".to_string(),
            expires_in: self.access_ttl.num_seconds().max(0) as u64,
        })
    }

    /// Access token lifetime.
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    /// Refresh token lifetime.
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    pub(crate) fn issue(
        &self,
        subject: String,
        token_type: TokenType,
        ttl: Duration,
        extra: ExtraClaims,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            token_type,
            extra,
        };

        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode {token_type} token: {e}")))
    }
}
