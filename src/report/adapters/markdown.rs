//! Markdown report rendered from a `minijinja` template.

use super::{normalize_prefix, report_file_name, rfc3339};
use crate::project::domain::ProjectTask;
use crate::report::{
    domain::{ProjectSummary, ProjectSummaryReport},
    ports::{ReportGenerator, ReportGeneratorError, ReportGeneratorResult},
};
use minijinja::Environment;
use serde_json::{Map, Value, json};

/// Template used when none is configured.
///
/// Templates see `project` (`name`, `description`, `owner`), `criteria`
/// (`status`, `from`, `to`), `generated_at`, and `tasks`, each task with
/// `id`, `title`, `description`, `status`, `owner`, `assigned_to`,
/// `created_at`, and `updated_at`.
pub const DEFAULT_MARKDOWN_TEMPLATE: &str = "\
# {{ project.name }}

{{ project.description }}

- Owner: {{ project.owner }}
- Status: {{ criteria.status }}
- Window: {{ criteria.from }} to {{ criteria.to }}
- Generated: {{ generated_at }}

| Title | Assignee | Owner | Updated |
| --- | --- | --- | --- |
{% for task in tasks %}| {{ task.title }} | {{ task.assigned_to }} | {{ task.owner }} | {{ task.updated_at }} |
{% else %}| _no matching tasks_ | | | |
{% endfor %}";

/// Renders the summary through a Markdown template.
#[derive(Debug, Clone)]
pub struct MarkdownReportGenerator {
    template: String,
    file_prefix: Option<String>,
}

impl Default for MarkdownReportGenerator {
    fn default() -> Self {
        Self {
            template: DEFAULT_MARKDOWN_TEMPLATE.to_owned(),
            file_prefix: None,
        }
    }
}

impl MarkdownReportGenerator {
    /// Creates a generator using [`DEFAULT_MARKDOWN_TEMPLATE`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Prepends `prefix` to generated file names.
    #[must_use]
    pub fn with_file_prefix(mut self, prefix: &str) -> Self {
        self.file_prefix = normalize_prefix(prefix);
        self
    }
}

impl ReportGenerator for MarkdownReportGenerator {
    fn generate(&self, summary: &ProjectSummary) -> ReportGeneratorResult<ProjectSummaryReport> {
        let environment = Environment::new();
        let rendered = environment
            .render_str(&self.template, build_template_context(summary))
            .map_err(|error| ReportGeneratorError::Template(error.to_string()))?;
        Ok(ProjectSummaryReport::new(
            report_file_name(self.file_prefix.as_deref(), summary, "md"),
            "text/markdown",
            rendered.into_bytes(),
        ))
    }
}

fn build_template_context(summary: &ProjectSummary) -> Map<String, Value> {
    let criteria = summary.criteria();
    let mut context = Map::new();
    context.insert(
        "project".to_owned(),
        json!({
            "name": summary.project_name(),
            "description": summary.project_description(),
            "owner": summary.owner().email().as_str(),
        }),
    );
    context.insert(
        "criteria".to_owned(),
        json!({
            "status": criteria.status().as_str(),
            "from": rfc3339(criteria.starts_at()),
            "to": rfc3339(criteria.ends_at()),
        }),
    );
    context.insert(
        "generated_at".to_owned(),
        Value::String(rfc3339(summary.generated_at())),
    );
    context.insert(
        "tasks".to_owned(),
        Value::Array(summary.tasks().iter().map(task_value).collect()),
    );
    context
}

fn task_value(task: &ProjectTask) -> Value {
    json!({
        "id": task.id().to_string(),
        "title": task.title(),
        "description": task.description(),
        "status": task.status().as_str(),
        "owner": task.owner().email().as_str(),
        "assigned_to": task.assigned_to().as_str(),
        "created_at": rfc3339(task.created_at()),
        "updated_at": rfc3339(task.updated_at()),
    })
}
