//! Error types for project domain validation and parsing.

use super::{ProjectId, TaskId, UserEmail};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing or mutating project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The e-mail address is malformed.
    #[error("invalid e-mail address '{0}'")]
    InvalidEmail(String),

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The user is not a member of the project.
    #[error("{email} is not a member of project {project_id}")]
    InvalidAssignment {
        /// Project whose membership was checked.
        project_id: ProjectId,
        /// Rejected identity.
        email: UserEmail,
    },

    /// The task does not belong to the project.
    #[error("task {task_id} does not belong to project {project_id}")]
    TaskNotInProject {
        /// Project that was searched.
        project_id: ProjectId,
        /// Task that was not found.
        task_id: TaskId,
    },

    /// The report time window ends before it starts.
    #[error("invalid time window: {from} is after {to}")]
    InvalidTimeWindow {
        /// Window start.
        from: DateTime<Utc>,
        /// Window end.
        to: DateTime<Utc>,
    },
}

/// Error returned while parsing task statuses from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
