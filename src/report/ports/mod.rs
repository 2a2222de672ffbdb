//! Port contracts for report generation.
//!
//! Report data is read through the project ports in
//! [`crate::project::ports`]; only the encoding strategy is report-specific.

pub mod generator;

pub use generator::{ReportGenerator, ReportGeneratorError, ReportGeneratorResult};
