//! Transient summary assembled for one report generation.

use crate::project::domain::{Project, ProjectId, ProjectOwner, ProjectTask, TaskCriteria};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Project data selected for a report.
///
/// Exists only for the duration of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    project_id: ProjectId,
    project_name: String,
    project_description: String,
    owner: ProjectOwner,
    criteria: TaskCriteria,
    tasks: Vec<ProjectTask>,
    generated_at: DateTime<Utc>,
}

impl ProjectSummary {
    /// Assembles a summary from a project and the tasks matching `criteria`.
    #[must_use]
    pub fn new(
        project: &Project,
        criteria: TaskCriteria,
        tasks: Vec<ProjectTask>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            project_id: project.id(),
            project_name: project.name().to_owned(),
            project_description: project.description().to_owned(),
            owner: project.owner().clone(),
            criteria,
            tasks,
            generated_at,
        }
    }

    /// Returns the summarised project's identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the project name.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Returns the project description.
    #[must_use]
    pub fn project_description(&self) -> &str {
        &self.project_description
    }

    /// Returns the project owner.
    #[must_use]
    pub const fn owner(&self) -> &ProjectOwner {
        &self.owner
    }

    /// Returns the criteria that selected the tasks.
    #[must_use]
    pub const fn criteria(&self) -> &TaskCriteria {
        &self.criteria
    }

    /// Returns the selected tasks in project order.
    #[must_use]
    pub fn tasks(&self) -> &[ProjectTask] {
        &self.tasks
    }

    /// Returns when the summary was assembled.
    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Returns a file-name-safe form of the project name.
    ///
    /// Lowercase ASCII alphanumerics are kept, every other run of characters
    /// becomes a single `-`. Falls back to `project` when nothing remains.
    #[must_use]
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.project_name.len());
        for ch in self.project_name.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        let trimmed = slug.trim_end_matches('-');
        if trimmed.is_empty() {
            return "project".to_owned();
        }
        trimmed.to_owned()
    }
}
