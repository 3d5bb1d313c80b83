//! Workboard: a multi-tenant project-management backend.
//!
//! Organizations own projects, projects own tasks, and tasks carry comment
//! threads. Everything is served through a single GraphQL endpoint.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Orchestration used by the API layer
//!
//! # Modules
//!
//! - [`organization`]: Tenants and slug derivation
//! - [`project`]: Projects scoped to an organization
//! - [`task`]: Tasks, comments and project progress counts
//! - [`api`]: GraphQL schema and HTTP routing
//! - [`app`]: Repository and service wiring
//! - [`config`]: Environment-driven server settings

pub mod api;
pub mod app;
pub mod config;
pub mod email;
pub mod organization;
pub mod persistence;
pub mod project;
pub mod task;
pub mod telemetry;
