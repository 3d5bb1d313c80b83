//! Conversion of service errors into GraphQL errors.
//!
//! Every error carries a `code` extension. Persistence failures are logged
//! and replaced by a generic message so storage details never reach clients.

use crate::organization::services::OrganizationServiceError;
use crate::project::services::ProjectServiceError;
use crate::task::services::TaskServiceError;
use async_graphql::{Error, ErrorExtensions, ID};
use uuid::Uuid;

/// Machine-readable error classes exposed in the `code` extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    NotFound,
    Conflict,
    BadUserInput,
    Internal,
}

impl ErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::BadUserInput => "BAD_USER_INPUT",
            Self::Internal => "INTERNAL",
        }
    }
}

/// Builds a GraphQL error with a `code` extension.
pub(crate) fn coded(code: ErrorCode, message: impl Into<String>) -> Error {
    Error::new(message).extend_with(|_, extensions| extensions.set("code", code.as_str()))
}

fn internal(err: &dyn std::error::Error) -> Error {
    tracing::error!(error = %err, "request failed");
    coded(ErrorCode::Internal, "internal error")
}

/// Rejects input that fails boundary validation.
pub(crate) fn bad_input(err: impl std::fmt::Display) -> Error {
    coded(ErrorCode::BadUserInput, err.to_string())
}

/// Parses a GraphQL `ID` holding a UUID.
pub(crate) fn parse_id(id: &ID) -> Result<Uuid, Error> {
    Uuid::parse_str(id.as_str()).map_err(|_| bad_input(format!("invalid id '{}'", id.as_str())))
}

impl ErrorExtensions for OrganizationServiceError {
    fn extend(&self) -> Error {
        match self {
            Self::Domain(_) => coded(ErrorCode::BadUserInput, self.to_string()),
            Self::DuplicateSlug(_) => coded(ErrorCode::Conflict, self.to_string()),
            Self::NotFound => coded(ErrorCode::NotFound, self.to_string()),
            Self::Repository(err) => internal(err),
        }
    }
}

impl ErrorExtensions for ProjectServiceError {
    fn extend(&self) -> Error {
        match self {
            Self::Domain(_) => coded(ErrorCode::BadUserInput, self.to_string()),
            Self::OrganizationNotFound | Self::NotFound(_) => {
                coded(ErrorCode::NotFound, self.to_string())
            }
            Self::Repository(err) => internal(err),
            Self::Organization(err) => internal(err),
        }
    }
}

impl ErrorExtensions for TaskServiceError {
    fn extend(&self) -> Error {
        match self {
            Self::Domain(_) => coded(ErrorCode::BadUserInput, self.to_string()),
            Self::ProjectNotFound(_) | Self::NotFound(_) => {
                coded(ErrorCode::NotFound, self.to_string())
            }
            Self::Repository(err) => internal(err),
            Self::Project(err) => internal(err),
        }
    }
}
