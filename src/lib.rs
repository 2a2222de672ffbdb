//! Projectboard: collaborative project and task management core.
//!
//! This crate holds the business rules for projects, their members and their
//! tasks, plus a subscription-gated export of task summaries as reports.
//!
//! # Architecture
//!
//! Projectboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and upstream
//!   services
//! - **Adapters**: Concrete implementations of ports (in-memory stores,
//!   report encoders)
//!
//! # Modules
//!
//! - [`project`]: Projects, membership, and task lifecycle
//! - [`report`]: Report summaries and their CSV, JSON, and Markdown encodings
//! - [`app`]: Wiring of ports into services, plus settings
//! - [`error`]: Error classification shared by both services

pub mod app;
pub mod error;
pub mod project;
pub mod report;

#[cfg(test)]
mod test_support;
