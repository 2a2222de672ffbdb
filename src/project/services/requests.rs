//! Request payloads accepted by [`super::ProjectService`].
//!
//! E-mail fields hold raw caller input; the service validates them.

use crate::project::domain::{ProjectId, TaskId, TaskStatus};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) owner_email: String,
}

impl CreateProjectRequest {
    /// Creates a request owned by the authenticated caller.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        owner_email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            owner_email: owner_email.into(),
        }
    }
}

/// Request payload for renaming a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeProjectNameRequest {
    pub(crate) project_id: ProjectId,
    pub(crate) new_name: String,
}

impl ChangeProjectNameRequest {
    /// Creates a rename request.
    #[must_use]
    pub fn new(project_id: ProjectId, new_name: impl Into<String>) -> Self {
        Self {
            project_id,
            new_name: new_name.into(),
        }
    }
}

/// Request payload for replacing a project's description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeProjectDescriptionRequest {
    pub(crate) project_id: ProjectId,
    pub(crate) new_description: String,
}

impl ChangeProjectDescriptionRequest {
    /// Creates a description change request.
    #[must_use]
    pub fn new(project_id: ProjectId, new_description: impl Into<String>) -> Self {
        Self {
            project_id,
            new_description: new_description.into(),
        }
    }
}

/// Request payload for replacing a project's member set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeProjectMembersRequest {
    pub(crate) project_id: ProjectId,
    pub(crate) member_emails: Vec<String>,
}

impl ChangeProjectMembersRequest {
    /// Creates a membership replacement request.
    #[must_use]
    pub fn new(project_id: ProjectId, member_emails: impl IntoIterator<Item = String>) -> Self {
        Self {
            project_id,
            member_emails: member_emails.into_iter().collect(),
        }
    }
}

/// Request payload for adding a task to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskToProjectRequest {
    pub(crate) project_id: ProjectId,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) owner_email: String,
    pub(crate) assignee_email: String,
}

impl AddTaskToProjectRequest {
    /// Creates a request with an empty description.
    ///
    /// `owner_email` is the authenticated caller adding the task.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        title: impl Into<String>,
        owner_email: impl Into<String>,
        assignee_email: impl Into<String>,
    ) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: String::new(),
            owner_email: owner_email.into(),
            assignee_email: assignee_email.into(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for removing a task from a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveTaskRequest {
    pub(crate) project_id: ProjectId,
    pub(crate) task_id: TaskId,
}

impl RemoveTaskRequest {
    /// Creates a removal request.
    #[must_use]
    pub const fn new(project_id: ProjectId, task_id: TaskId) -> Self {
        Self {
            project_id,
            task_id,
        }
    }
}

/// Request payload for moving a task to another status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeTaskStatusRequest {
    pub(crate) project_id: ProjectId,
    pub(crate) task_id: TaskId,
    pub(crate) status: TaskStatus,
}

impl ChangeTaskStatusRequest {
    /// Creates a status change request.
    #[must_use]
    pub const fn new(project_id: ProjectId, task_id: TaskId, status: TaskStatus) -> Self {
        Self {
            project_id,
            task_id,
            status,
        }
    }
}

/// Request payload for assigning a task to another member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignTaskRequest {
    pub(crate) project_id: ProjectId,
    pub(crate) task_id: TaskId,
    pub(crate) assignee_email: String,
}

impl ReassignTaskRequest {
    /// Creates a reassignment request.
    #[must_use]
    pub fn new(project_id: ProjectId, task_id: TaskId, assignee_email: impl Into<String>) -> Self {
        Self {
            project_id,
            task_id,
            assignee_email: assignee_email.into(),
        }
    }
}
