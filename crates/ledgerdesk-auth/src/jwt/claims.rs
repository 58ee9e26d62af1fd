//! JWT claims carried by access and refresh tokens.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use ledgerdesk_core::types::UserId;

/// Optional, non-authoritative claims attached to access tokens.
pub type ExtraClaims = Map<String, Value>;

/// Claim names extra claims may never use: the codec's own claims plus the
/// remaining registered JWT claims, which the decoder would otherwise act on.
pub const RESERVED_CLAIMS: [&str; 8] = ["sub", "iat", "exp", "type", "aud", "iss", "nbf", "jti"];

/// Signed claim set embedded in every token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account identifier, string-encoded.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Access or refresh.
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Extra claims such as a denormalized role.
    ///
    /// Informational only: authorization always re-reads the account.
    #[serde(flatten)]
    pub extra: ExtraClaims,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived token for API requests.
    Access,
    /// Long-lived token that can only mint new access tokens.
    Refresh,
}

impl TokenType {
    /// Return the discriminator as written into the `type` claim.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Claims {
    /// Parses the subject as an account identifier.
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Looks up an extra claim by name.
    pub fn extra(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}
