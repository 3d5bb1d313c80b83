//! Error types for task domain validation and parsing.

use crate::email::InvalidEmailError;
use thiserror::Error;

/// Errors returned while constructing task and comment values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title is {0} characters long, at most 200 are allowed")]
    TitleTooLong(usize),

    /// The comment body is empty after trimming.
    #[error("comment content must not be empty")]
    EmptyComment,

    /// An assignee or author e-mail address is malformed.
    #[error(transparent)]
    InvalidEmail(#[from] InvalidEmailError),

    /// The status value is not one of the known task statuses.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
