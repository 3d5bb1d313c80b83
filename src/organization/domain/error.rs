//! Error types for organization domain validation.

use crate::email::InvalidEmailError;
use thiserror::Error;

/// Errors returned while constructing organization values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrganizationDomainError {
    /// The organization name is empty after trimming.
    #[error("organization name must not be empty")]
    EmptyName,

    /// The organization name exceeds the persisted column width.
    #[error("organization name is {0} characters long, at most 100 are allowed")]
    NameTooLong(usize),

    /// The name contains no character that survives slug derivation.
    #[error("organization name '{0}' does not produce a usable slug")]
    UnsluggableName(String),

    /// The value is not a well-formed slug.
    #[error("invalid organization slug '{0}'")]
    InvalidSlug(String),

    /// The contact e-mail address is malformed.
    #[error(transparent)]
    InvalidContactEmail(#[from] InvalidEmailError),
}
