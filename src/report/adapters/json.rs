//! JSON report encoding.

use super::{normalize_prefix, report_file_name};
use crate::report::{
    domain::{ProjectSummary, ProjectSummaryReport},
    ports::{ReportGenerator, ReportGeneratorError, ReportGeneratorResult},
};

/// Serialises the whole summary as pretty-printed JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonReportGenerator {
    file_prefix: Option<String>,
}

impl JsonReportGenerator {
    /// Creates a generator without a file-name prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `prefix` to generated file names.
    #[must_use]
    pub fn with_file_prefix(mut self, prefix: &str) -> Self {
        self.file_prefix = normalize_prefix(prefix);
        self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate(&self, summary: &ProjectSummary) -> ReportGeneratorResult<ProjectSummaryReport> {
        let payload = serde_json::to_vec_pretty(summary).map_err(ReportGeneratorError::encoding)?;
        Ok(ProjectSummaryReport::new(
            report_file_name(self.file_prefix.as_deref(), summary, "json"),
            "application/json",
            payload,
        ))
    }
}
