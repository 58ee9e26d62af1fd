//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authorization tiers. The set is closed: an unrecognised role string is a
/// data-integrity error, never a valid state.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Practice administrator.
    Admin,
    /// Practice staff member.
    Staff,
    /// Client of the practice.
    #[default]
    Client,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        match self {
            Self::Admin => true,
            Self::Staff | Self::Client => false,
        }
    }

    /// Check if this role belongs to the practice (staff or admin).
    pub fn is_staff_or_admin(&self) -> bool {
        match self {
            Self::Admin | Self::Staff => true,
            Self::Client => false,
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ledgerdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            "client" => Ok(Self::Client),
            _ => Err(ledgerdesk_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, staff, client"
            ))),
        }
    }
}
