//! Validated e-mail address shared by organization contacts, task assignees,
//! and comment authors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum length accepted for an e-mail address (RFC 5321 path limit).
const MAX_EMAIL_LENGTH: usize = 254;

/// Error returned when an e-mail address fails validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid email address '{0}'")]
pub struct InvalidEmailError(pub String);

/// Trimmed e-mail address with a non-empty local part and domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated e-mail address.
    ///
    /// Only the shape `local@domain` is checked; deliverability is not.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEmailError`] when the value is empty, too long,
    /// contains whitespace, or does not contain exactly one `@` separating
    /// non-empty parts.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidEmailError> {
        let raw = value.into();
        let normalized = raw.trim();
        let mut parts = normalized.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && parts.next().is_none()
            && normalized.len() <= MAX_EMAIL_LENGTH
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(InvalidEmailError(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
