//! Domain model for project reports.

mod report;
mod summary;

pub use report::ProjectSummaryReport;
pub use summary::ProjectSummary;
