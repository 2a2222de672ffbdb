//! Comma-separated report encoding.

use super::{normalize_prefix, report_file_name, rfc3339};
use crate::project::domain::ProjectTask;
use crate::report::{
    domain::{ProjectSummary, ProjectSummaryReport},
    ports::{ReportGenerator, ReportGeneratorResult},
};

const HEADER: [&str; 8] = [
    "id",
    "title",
    "description",
    "status",
    "owner",
    "assigned_to",
    "created_at",
    "updated_at",
];

/// Encodes one row per task following RFC 4180.
#[derive(Debug, Clone, Default)]
pub struct CsvReportGenerator {
    file_prefix: Option<String>,
}

impl CsvReportGenerator {
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

impl ReportGenerator for CsvReportGenerator {
    fn generate(&self, summary: &ProjectSummary) -> ReportGeneratorResult<ProjectSummaryReport> {
        let mut body = String::new();
        push_row(&mut body, HEADER.iter().map(|field| (*field).to_owned()));
        for task in summary.tasks() {
            push_row(&mut body, task_fields(task));
        }
        Ok(ProjectSummaryReport::new(
            report_file_name(self.file_prefix.as_deref(), summary, "csv"),
            "text/csv",
            body.into_bytes(),
        ))
    }
}

fn task_fields(task: &ProjectTask) -> [String; 8] {
    [
        task.id().to_string(),
        task.title().to_owned(),
        task.description().to_owned(),
        task.status().as_str().to_owned(),
        task.owner().to_string(),
        task.assigned_to().to_string(),
        rfc3339(task.created_at()),
        rfc3339(task.updated_at()),
    ]
}

fn push_row(body: &mut String, fields: impl IntoIterator<Item = String>) {
    for (index, field) in fields.into_iter().enumerate() {
        if index > 0 {
            body.push(',');
        }
        body.push_str(&escape_field(&field));
    }
    body.push_str("\r\n");
}

/// Quotes a field when it contains a delimiter, quote, or line break.
///
/// Embedded quotes are doubled.
fn escape_field(value: &str) -> String {
    if !value.contains([',', '"', '\n', '\r']) {
        return value.to_owned();
    }
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for ch in value.chars() {
        if ch == '"' {
            escaped.push_str("\"\"");
        } else {
            escaped.push(ch);
        }
    }
    escaped.push('"');
    escaped
}
