//! Inputs accepted by [`AccountService`](super::AccountService) and the
//! rules applied to them regardless of which front end supplied them.

use ledgerdesk_core::error::AppError;
use ledgerdesk_entity::user::{ProfileUpdate, UserRole};

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Longest accepted password, in characters.
pub const MAX_PASSWORD_LEN: usize = 128;
/// Longest accepted name, in characters.
pub const MAX_FIELD_LEN: usize = 100;
/// Longest accepted phone number, in characters. Matches the `phone` column.
pub const MAX_PHONE_LEN: usize = 20;

/// Data for creating an account.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Login email; normalized to lowercase.
    pub email: String,
    /// Plaintext password; hashed before it reaches the store.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Optional phone number.
    pub phone: Option<String>,
}

/// Email and password presented at login.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Administrative changes to an account.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountChanges {
    /// New role.
    pub role: Option<UserRole>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl AccountChanges {
    /// Whether nothing would change.
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.is_active.is_none()
    }
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub(crate) fn check_email(email: &str) -> Result<(), AppError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid || email.chars().any(char::is_whitespace) {
        return Err(AppError::validation("Invalid email format"));
    }
    Ok(())
}

pub(crate) fn check_password(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if len > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at most {MAX_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

pub(crate) fn check_name(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(AppError::validation(format!(
            "{field} must be at most {MAX_FIELD_LEN} characters"
        )));
    }
    Ok(())
}

pub(crate) fn check_profile(update: &ProfileUpdate) -> Result<(), AppError> {
    if let Some(first_name) = &update.first_name {
        check_name("First name", first_name)?;
    }
    if let Some(last_name) = &update.last_name {
        check_name("Last name", last_name)?;
    }
    if let Some(phone) = &update.phone {
        if phone.chars().count() > MAX_PHONE_LEN {
            return Err(AppError::validation(format!(
                "Phone number must be at most {MAX_PHONE_LEN} characters"
            )));
        }
    }
    Ok(())
}

impl Registration {
    pub(crate) fn check(&self) -> Result<(), AppError> {
        check_email(&normalize_email(&self.email))?;
        check_password(&self.password)?;
        check_name("First name", &self.first_name)?;
        check_name("Last name", &self.last_name)?;
        check_profile(&ProfileUpdate {
            phone: self.phone.clone(),
            ..Default::default()
        })
    }
}
