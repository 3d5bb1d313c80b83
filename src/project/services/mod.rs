//! Application services for project management.

mod portfolio;

pub use portfolio::{
    CreateProjectRequest, ProjectService, ProjectServiceError, ProjectServiceResult,
    UpdateProjectRequest,
};
