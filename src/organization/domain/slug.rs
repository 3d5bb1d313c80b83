//! URL-safe organization slugs.

use super::{OrganizationDomainError, OrganizationName};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Unique, URL-safe organization identifier derived from its name.
///
/// A slug contains only lowercase ASCII letters, digits, underscores and
/// single hyphens, and never starts or ends with a hyphen or underscore.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationSlug(String);

impl OrganizationSlug {
    /// Derives a slug from an organization name.
    ///
    /// Lowercases the name, drops every character other than ASCII
    /// alphanumerics, underscores, hyphens and whitespace, then collapses
    /// runs of whitespace and hyphens into one hyphen. `"My Startup"`
    /// becomes `my-startup`.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizationDomainError::UnsluggableName`] when nothing
    /// survives the derivation.
    pub fn from_name(name: &OrganizationName) -> Result<Self, OrganizationDomainError> {
        let slug = slugify(name.as_str());
        if slug.is_empty() {
            return Err(OrganizationDomainError::UnsluggableName(
                name.as_str().to_owned(),
            ));
        }
        Ok(Self(slug))
    }

    /// Parses an existing slug, for example one supplied by a caller to
    /// address an organization.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizationDomainError::InvalidSlug`] when the value is not
    /// already in canonical slug form.
    pub fn parse(value: impl Into<String>) -> Result<Self, OrganizationDomainError> {
        let raw = value.into();
        if raw.is_empty() || slugify(&raw) != raw {
            return Err(OrganizationDomainError::InvalidSlug(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the slug as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OrganizationSlug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OrganizationSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Folds `value` to ASCII via NFKD, so accented letters keep their base
/// letter, then lowercases and hyphenates it.
fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;
    for ch in value.nfkd().filter(char::is_ascii) {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch == '-' || ch.is_whitespace() {
            pending_separator = true;
        }
    }
    slug.trim_matches(|c| c == '-' || c == '_').to_owned()
}
