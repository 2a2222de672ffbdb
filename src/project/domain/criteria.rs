//! Task query criteria.

use super::{ProjectDomainError, ProjectId, ProjectTask, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter used to query a project's tasks.
///
/// The time window is inclusive on both ends and is compared against each
/// task's creation timestamp ([`ProjectTask::created_at`]). Later status
/// changes or reassignments do not move a task out of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCriteria {
    project_id: ProjectId,
    status: TaskStatus,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl TaskCriteria {
    /// Creates validated criteria.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidTimeWindow`] when `from` is after
    /// `to`.
    pub fn new(
        project_id: ProjectId,
        status: TaskStatus,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Self, ProjectDomainError> {
        if from > to {
            return Err(ProjectDomainError::InvalidTimeWindow { from, to });
        }
        Ok(Self {
            project_id,
            status,
            from,
            to,
        })
    }

    /// Returns the project to search.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the required status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the window start.
    #[must_use]
    pub const fn starts_at(&self) -> DateTime<Utc> {
        self.from
    }

    /// Returns the window end.
    #[must_use]
    pub const fn ends_at(&self) -> DateTime<Utc> {
        self.to
    }

    /// Returns whether `task` satisfies every component of the criteria.
    #[must_use]
    pub fn matches(&self, task: &ProjectTask) -> bool {
        let created = task.created_at();
        task.project_id() == self.project_id
            && task.status() == self.status
            && created >= self.from
            && created <= self.to
    }
}
