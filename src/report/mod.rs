//! Subscription-gated project report export.
//!
//! A report selects a project's tasks by status and activity window, checks
//! that the caller's plan allows export, and hands the resulting summary to
//! a caller-chosen [`ports::ReportGenerator`]. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Generator implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
