//! Strategy port turning a summary into an encoded report.

use crate::report::domain::{ProjectSummary, ProjectSummaryReport};
use std::sync::Arc;
use thiserror::Error;

/// Result type for report generation.
pub type ReportGeneratorResult<T> = Result<T, ReportGeneratorError>;

/// Encodes a [`ProjectSummary`] into a downloadable artifact.
///
/// The report service decides which data belongs in a report; implementors
/// decide only how it is encoded. Closures with the matching signature are
/// generators too.
pub trait ReportGenerator: Send + Sync {
    /// Encodes `summary`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportGeneratorError`] when encoding fails.
    fn generate(&self, summary: &ProjectSummary) -> ReportGeneratorResult<ProjectSummaryReport>;
}

impl<F> ReportGenerator for F
where
    F: Fn(&ProjectSummary) -> ReportGeneratorResult<ProjectSummaryReport> + Send + Sync,
{
    fn generate(&self, summary: &ProjectSummary) -> ReportGeneratorResult<ProjectSummaryReport> {
        self(summary)
    }
}

/// Errors returned by report generators.
#[derive(Debug, Clone, Error)]
pub enum ReportGeneratorError {
    /// A template could not be rendered.
    #[error("report template failed to render: {0}")]
    Template(String),

    /// Serialisation of the summary failed.
    #[error("report encoding failed: {0}")]
    Encoding(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReportGeneratorError {
    /// Wraps a serialisation error.
    pub fn encoding(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Encoding(Arc::new(err))
    }
}
