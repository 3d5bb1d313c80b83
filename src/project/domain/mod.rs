//! Domain model for projects.

mod error;
mod ids;
mod project;
mod status;

pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use ids::{ProjectId, ProjectName};
pub use project::{NewProject, PersistedProjectData, Project, ProjectChanges};
pub use status::ProjectStatus;
