//! Application services for report export.

mod export;

pub use export::{GenerateReportRequest, ReportService, ReportServiceError, ReportServiceResult};
