//! Task tracking within projects.
//!
//! Tasks belong to one project and carry a status, an optional assignee,
//! and a thread of comments. Projects derive their progress counters from
//! the tasks stored here. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
