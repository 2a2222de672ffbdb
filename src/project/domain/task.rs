//! Project task entity and its lifecycle status.

use super::{ParseTaskStatusError, ProjectDomainError, ProjectId, TaskId, TaskOwner, UserEmail};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
///
/// Any status may follow any other; the history on [`ProjectTask`] records
/// the order in which they occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// One entry of a task's status history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Status entered.
    pub status: TaskStatus,
    /// When the status was entered.
    pub changed_at: DateTime<Utc>,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Member creating the task.
    pub owner: TaskOwner,
    /// Member the task is assigned to.
    pub assigned_to: UserEmail,
}

/// A unit of work owned by a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTask {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: String,
    owner: TaskOwner,
    assigned_to: UserEmail,
    status: TaskStatus,
    history: Vec<StatusChange>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning project identifier.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted creator.
    pub owner: TaskOwner,
    /// Persisted assignee.
    pub assigned_to: UserEmail,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted status history, oldest first.
    pub history: Vec<StatusChange>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest activity timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ProjectTask {
    /// Creates a task in [`TaskStatus::Todo`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn new(
        project_id: ProjectId,
        params: NewTask,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let NewTask {
            title,
            description,
            owner,
            assigned_to,
        } = params;
        let trimmed_title = title.trim();
        if trimmed_title.is_empty() {
            return Err(ProjectDomainError::EmptyTaskTitle);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            project_id,
            title: trimmed_title.to_owned(),
            description,
            owner,
            assigned_to,
            status: TaskStatus::Todo,
            history: vec![StatusChange {
                status: TaskStatus::Todo,
                changed_at: timestamp,
            }],
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            owner: data.owner,
            assigned_to: data.assigned_to,
            status: data.status,
            history: data.history,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the member who created the task.
    #[must_use]
    pub const fn owner(&self) -> &TaskOwner {
        &self.owner
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assigned_to(&self) -> &UserEmail {
        &self.assigned_to
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the status history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[StatusChange] {
        &self.history
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest activity timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to `status`.
    ///
    /// Returns `false` without touching timestamps when the task already has
    /// that status.
    pub fn change_status(&mut self, status: TaskStatus, clock: &impl Clock) -> bool {
        if self.status == status {
            return false;
        }
        let timestamp = clock.utc();
        self.status = status;
        self.history.push(StatusChange {
            status,
            changed_at: timestamp,
        });
        self.updated_at = timestamp;
        true
    }

    /// Assigns the task to another member.
    ///
    /// Returns `false` when the assignee is unchanged.
    pub fn reassign(&mut self, assignee: UserEmail, clock: &impl Clock) -> bool {
        if self.assigned_to == assignee {
            return false;
        }
        self.assigned_to = assignee;
        self.updated_at = clock.utc();
        true
    }
}
