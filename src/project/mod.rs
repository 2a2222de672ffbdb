//! Project, membership, and task management.
//!
//! A project is created by its owner, shared with members resolved through
//! the user-profile service, and carries an ordered list of tasks assigned
//! to those members. The module follows hexagonal architecture:
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
