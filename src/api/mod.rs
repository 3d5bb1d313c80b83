//! GraphQL API over the application services.
//!
//! The schema mirrors the documents the web client sends: three queries,
//! mutations returning payload objects that wrap the affected record, and
//! object types resolving their relations lazily through the services.

mod error;
pub mod http;
mod mutation;
mod objects;
mod query;
mod scalars;

use crate::app::AppServices;
use async_graphql::{EmptySubscription, Schema};

pub use mutation::MutationRoot;
pub use objects::{
    CommentObject, CommentPayload, OrganizationObject, OrganizationPayload, ProjectObject,
    ProjectPayload, ProjectStatusValue, TaskObject, TaskPayload, TaskStatusValue,
};
pub use query::QueryRoot;
pub use scalars::Date;

/// The executable schema type.
pub type WorkboardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the services available to every resolver.
#[must_use]
pub fn build_schema(services: AppServices) -> WorkboardSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}
