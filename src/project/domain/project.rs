//! Project aggregate root.

use super::{
    NewTask, ProjectDomainError, ProjectId, ProjectMember, ProjectOwner, ProjectTask, TaskId,
    TaskStatus, UserEmail,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project aggregate root owning its members and tasks.
///
/// The owner is always the first member. Tasks keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    owner: ProjectOwner,
    members: Vec<ProjectMember>,
    tasks: Vec<ProjectTask>,
    archived: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted owner.
    pub owner: ProjectOwner,
    /// Persisted members; the owner is re-inserted if missing.
    pub members: Vec<ProjectMember>,
    /// Persisted tasks in display order.
    pub tasks: Vec<ProjectTask>,
    /// Persisted archive flag.
    pub archived: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates an active project whose only member is its owner.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectName`] when the name is
    /// blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        owner: ProjectOwner,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: ProjectId::new(),
            name: validate_name(name.into())?,
            description: description.into(),
            members: vec![ProjectMember::from(&owner)],
            owner,
            tasks: Vec::new(),
            archived: false,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        let members = with_owner_first(&data.owner, data.members);
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            owner: data.owner,
            members,
            tasks: data.tasks,
            archived: data.archived,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the project owner.
    #[must_use]
    pub const fn owner(&self) -> &ProjectOwner {
        &self.owner
    }

    /// Returns the effective members, owner first.
    #[must_use]
    pub fn members(&self) -> &[ProjectMember] {
        &self.members
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[ProjectTask] {
        &self.tasks
    }

    /// Returns a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&ProjectTask> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns whether the project has been archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.archived
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether `email` is an effective member.
    #[must_use]
    pub fn is_member(&self, email: &UserEmail) -> bool {
        self.members.iter().any(|member| member.email() == email)
    }

    /// Renames the project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectName`] when the name is
    /// blank.
    pub fn rename(
        &mut self,
        name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        self.name = validate_name(name.into())?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the description.
    pub fn change_description(&mut self, description: impl Into<String>, clock: &impl Clock) {
        self.description = description.into();
        self.touch(clock);
    }

    /// Marks the project archived.
    ///
    /// Returns `false` when it was already archived.
    pub fn archive(&mut self, clock: &impl Clock) -> bool {
        if self.archived {
            return false;
        }
        self.archived = true;
        self.touch(clock);
        true
    }

    /// Replaces the member set.
    ///
    /// Duplicates are collapsed and the owner is re-inserted at the front
    /// when omitted, keeping the owner's current profile. An owner entry in
    /// `members` replaces that profile.
    pub fn replace_members(
        &mut self,
        members: impl IntoIterator<Item = ProjectMember>,
        clock: &impl Clock,
    ) {
        let current_owner = self
            .members
            .iter()
            .find(|member| member.email() == self.owner.email())
            .cloned();
        self.members = with_owner_first(&self.owner, current_owner.into_iter().chain(members));
        self.touch(clock);
    }

    /// Appends a new task in [`TaskStatus::Todo`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidAssignment`] when the task owner
    /// or the assignee is not a member, or
    /// [`ProjectDomainError::EmptyTaskTitle`] for a blank title.
    pub fn add_task(
        &mut self,
        params: NewTask,
        clock: &impl Clock,
    ) -> Result<TaskId, ProjectDomainError> {
        self.ensure_member(&params.assigned_to)?;
        self.ensure_member(params.owner.email())?;
        let task = ProjectTask::new(self.id, params, clock)?;
        let task_id = task.id();
        self.tasks.push(task);
        self.touch(clock);
        Ok(task_id)
    }

    /// Removes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotInProject`] when no task has the
    /// identifier.
    pub fn remove_task(
        &mut self,
        task_id: TaskId,
        clock: &impl Clock,
    ) -> Result<ProjectTask, ProjectDomainError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == task_id)
            .ok_or(ProjectDomainError::TaskNotInProject {
                project_id: self.id,
                task_id,
            })?;
        let removed = self.tasks.remove(position);
        self.touch(clock);
        Ok(removed)
    }

    /// Changes a task's status.
    ///
    /// Returns `false` when the task already had the status.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskNotInProject`] when no task has the
    /// identifier.
    pub fn change_task_status(
        &mut self,
        task_id: TaskId,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<bool, ProjectDomainError> {
        let changed = self.task_mut(task_id)?.change_status(status, clock);
        if changed {
            self.touch(clock);
        }
        Ok(changed)
    }

    /// Assigns a task to another member.
    ///
    /// Returns `false` when the assignee is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidAssignment`] when the assignee is
    /// not a member or [`ProjectDomainError::TaskNotInProject`] when no task
    /// has the identifier.
    pub fn reassign_task(
        &mut self,
        task_id: TaskId,
        assignee: UserEmail,
        clock: &impl Clock,
    ) -> Result<bool, ProjectDomainError> {
        self.ensure_member(&assignee)?;
        let changed = self.task_mut(task_id)?.reassign(assignee, clock);
        if changed {
            self.touch(clock);
        }
        Ok(changed)
    }

    fn ensure_member(&self, email: &UserEmail) -> Result<(), ProjectDomainError> {
        if self.is_member(email) {
            return Ok(());
        }
        Err(ProjectDomainError::InvalidAssignment {
            project_id: self.id,
            email: email.clone(),
        })
    }

    fn task_mut(&mut self, task_id: TaskId) -> Result<&mut ProjectTask, ProjectDomainError> {
        let project_id = self.id;
        self.tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or(ProjectDomainError::TaskNotInProject {
                project_id,
                task_id,
            })
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn validate_name(name: String) -> Result<String, ProjectDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ProjectDomainError::EmptyProjectName);
    }
    Ok(trimmed.to_owned())
}

fn with_owner_first(
    owner: &ProjectOwner,
    members: impl IntoIterator<Item = ProjectMember>,
) -> Vec<ProjectMember> {
    let mut result: Vec<ProjectMember> = Vec::new();
    let mut owner_entry = ProjectMember::from(owner);
    for member in members {
        if member.email() == owner.email() {
            owner_entry = member;
            continue;
        }
        if !result.iter().any(|existing| existing.email() == member.email()) {
            result.push(member);
        }
    }
    result.insert(0, owner_entry);
    result
}
