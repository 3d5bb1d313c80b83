//! Organization (tenant) management.
//!
//! Organizations are the top-level tenants: every project belongs to exactly
//! one of them and is addressed through the organization's slug. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
