//! Service layer for project, membership, and task management.

use super::requests::{
    AddTaskToProjectRequest, ChangeProjectDescriptionRequest, ChangeProjectMembersRequest,
    ChangeProjectNameRequest, ChangeTaskStatusRequest, CreateProjectRequest, ReassignTaskRequest,
    RemoveTaskRequest,
};
use crate::error::ErrorKind;
use crate::project::{
    domain::{
        NewTask, Project, ProjectDomainError, ProjectId, ProjectMember, ProjectOwner, TaskOwner,
        UserEmail,
    },
    ports::{ProjectRepository, ProjectRepositoryError, UserProfileClient, UserProfileClientError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// The project does not exist or is archived.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The user-profile service does not know these users.
    #[error("unknown users: {}", join_emails(.0))]
    UnknownMembers(Vec<UserEmail>),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),

    /// The user-profile service failed.
    #[error(transparent)]
    UserProfile(#[from] UserProfileClientError),
}

impl ProjectServiceError {
    /// Classifies the failure for inbound adapters.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ProjectNotFound(_)
            | Self::Domain(ProjectDomainError::TaskNotInProject { .. }) => ErrorKind::NotFound,
            Self::Domain(ProjectDomainError::InvalidAssignment { .. }) => {
                ErrorKind::InvalidAssignment
            }
            Self::UnknownMembers(_) | Self::Domain(_) => ErrorKind::InvalidInput,
            Self::Repository(_) => ErrorKind::Persistence,
            Self::UserProfile(_) => ErrorKind::UpstreamUnavailable,
        }
    }
}

fn join_emails(emails: &[UserEmail]) -> String {
    emails
        .iter()
        .map(UserEmail::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project management orchestration service.
///
/// Every mutation loads the aggregate, applies the change in memory and
/// saves it once; a failed call performs no write.
#[derive(Clone)]
pub struct ProjectService<R, U, C>
where
    R: ProjectRepository,
    U: UserProfileClient,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    profiles: Arc<U>,
    clock: Arc<C>,
}

impl<R, U, C> ProjectService<R, U, C>
where
    R: ProjectRepository,
    U: UserProfileClient,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<R>, profiles: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            repository,
            profiles,
            clock,
        }
    }

    /// Creates a project owned by the requesting user.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] when the owner e-mail or name
    /// is invalid, or [`ProjectServiceError::Repository`] when persistence
    /// fails.
    #[instrument(skip(self, request), fields(owner = %request.owner_email))]
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> ProjectServiceResult<Project> {
        let CreateProjectRequest {
            name,
            description,
            owner_email,
        } = request;
        let owner = ProjectOwner::new(UserEmail::new(owner_email)?);
        let project = Project::new(name, description, owner, &*self.clock)?;
        self.repository.save(&project).await?;
        info!(project_id = %project.id(), "created project");
        Ok(project)
    }

    /// Returns every active project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when lookup fails.
    pub async fn get_all_projects(&self) -> ProjectServiceResult<Vec<Project>> {
        let projects = self.repository.find_all(false).await?;
        debug!(count = projects.len(), "listed active projects");
        Ok(projects)
    }

    /// Returns an active project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::ProjectNotFound`] when the project is
    /// unknown or archived.
    #[instrument(skip(self))]
    pub async fn get_project_by_id(&self, project_id: ProjectId) -> ProjectServiceResult<Project> {
        self.load_active(project_id).await
    }

    /// Returns the active projects owned by `owner_email`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] for a malformed e-mail or
    /// [`ProjectServiceError::Repository`] when lookup fails.
    pub async fn get_projects_by_owner_email(
        &self,
        owner_email: &str,
    ) -> ProjectServiceResult<Vec<Project>> {
        let owner = UserEmail::new(owner_email)?;
        let projects = self.repository.find_by_owner_email(&owner, false).await?;
        debug!(%owner, count = projects.len(), "listed projects by owner");
        Ok(projects)
    }

    /// Renames a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::ProjectNotFound`],
    /// [`ProjectServiceError::Domain`] for a blank name, or
    /// [`ProjectServiceError::Repository`].
    #[instrument(skip(self, request), fields(project_id = %request.project_id))]
    pub async fn change_project_name(
        &self,
        request: ChangeProjectNameRequest,
    ) -> ProjectServiceResult<Project> {
        let mut project = self.load_active(request.project_id).await?;
        project.rename(request.new_name, &*self.clock)?;
        self.persist(project, "renamed project").await
    }

    /// Replaces a project's description.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::ProjectNotFound`] or
    /// [`ProjectServiceError::Repository`].
    #[instrument(skip(self, request), fields(project_id = %request.project_id))]
    pub async fn change_project_description(
        &self,
        request: ChangeProjectDescriptionRequest,
    ) -> ProjectServiceResult<Project> {
        let mut project = self.load_active(request.project_id).await?;
        project.change_description(request.new_description, &*self.clock);
        self.persist(project, "changed project description").await
    }

    /// Archives a project.
    ///
    /// Archiving an already archived project succeeds without writing.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::ProjectNotFound`] when the project does
    /// not exist at all, or [`ProjectServiceError::Repository`].
    #[instrument(skip(self))]
    pub async fn archive_project(&self, project_id: ProjectId) -> ProjectServiceResult<Project> {
        let mut project = self
            .repository
            .find_by_id(project_id, true)
            .await?
            .ok_or(ProjectServiceError::ProjectNotFound(project_id))?;
        if !project.archive(&*self.clock) {
            debug!("project already archived");
            return Ok(project);
        }
        self.persist(project, "archived project").await
    }

    /// Replaces a project's member set.
    ///
    /// Every requested e-mail other than the owner's is resolved through the
    /// user-profile service. The owner stays a member whether or not the
    /// request lists them; the owner's profile is refreshed by the same
    /// lookup when the service knows it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::UnknownMembers`] when the profile
    /// service cannot resolve some e-mails,
    /// [`ProjectServiceError::UserProfile`] when it fails,
    /// [`ProjectServiceError::ProjectNotFound`],
    /// [`ProjectServiceError::Domain`] for malformed e-mails, or
    /// [`ProjectServiceError::Repository`].
    #[instrument(skip(self, request), fields(project_id = %request.project_id))]
    pub async fn change_project_members(
        &self,
        request: ChangeProjectMembersRequest,
    ) -> ProjectServiceResult<Project> {
        let mut project = self.load_active(request.project_id).await?;
        let requested = parse_member_emails(request.member_emails, project.owner())?;
        let members = self.resolve_members(project.owner(), &requested).await?;
        project.replace_members(members, &*self.clock);
        self.persist(project, "replaced project members").await
    }

    /// Adds a task assigned to a current member.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] wrapping
    /// [`ProjectDomainError::InvalidAssignment`] when the assignee or the
    /// task owner is not a member, [`ProjectServiceError::ProjectNotFound`],
    /// or [`ProjectServiceError::Repository`].
    #[instrument(skip(self, request), fields(project_id = %request.project_id))]
    pub async fn add_task_to_project(
        &self,
        request: AddTaskToProjectRequest,
    ) -> ProjectServiceResult<Project> {
        let AddTaskToProjectRequest {
            project_id,
            title,
            description,
            owner_email,
            assignee_email,
        } = request;
        let owner = TaskOwner::new(UserEmail::new(owner_email)?);
        let assigned_to = UserEmail::new(assignee_email)?;
        let mut project = self.load_active(project_id).await?;

        let task_id = project
            .add_task(
                NewTask {
                    title,
                    description,
                    owner,
                    assigned_to,
                },
                &*self.clock,
            )
            .inspect_err(|err| warn!(error = %err, "rejected task"))?;
        info!(task_id = %task_id, "added task");
        self.persist(project, "saved project after task addition")
            .await
    }

    /// Removes a task from a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] wrapping
    /// [`ProjectDomainError::TaskNotInProject`],
    /// [`ProjectServiceError::ProjectNotFound`], or
    /// [`ProjectServiceError::Repository`].
    #[instrument(skip(self, request), fields(project_id = %request.project_id, task_id = %request.task_id))]
    pub async fn remove_task_from_project(
        &self,
        request: RemoveTaskRequest,
    ) -> ProjectServiceResult<Project> {
        let mut project = self.load_active(request.project_id).await?;
        project.remove_task(request.task_id, &*self.clock)?;
        self.persist(project, "removed task").await
    }

    /// Moves a task to another status.
    ///
    /// Any status may follow any other. Requesting the current status
    /// returns the project without writing.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] wrapping
    /// [`ProjectDomainError::TaskNotInProject`],
    /// [`ProjectServiceError::ProjectNotFound`], or
    /// [`ProjectServiceError::Repository`].
    #[instrument(skip(self, request), fields(project_id = %request.project_id, task_id = %request.task_id, status = %request.status))]
    pub async fn change_task_status(
        &self,
        request: ChangeTaskStatusRequest,
    ) -> ProjectServiceResult<Project> {
        let mut project = self.load_active(request.project_id).await?;
        if !project.change_task_status(request.task_id, request.status, &*self.clock)? {
            return Ok(project);
        }
        self.persist(project, "changed task status").await
    }

    /// Assigns a task to another current member.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] wrapping
    /// [`ProjectDomainError::InvalidAssignment`] or
    /// [`ProjectDomainError::TaskNotInProject`],
    /// [`ProjectServiceError::ProjectNotFound`], or
    /// [`ProjectServiceError::Repository`].
    #[instrument(skip(self, request), fields(project_id = %request.project_id, task_id = %request.task_id))]
    pub async fn reassign_task(
        &self,
        request: ReassignTaskRequest,
    ) -> ProjectServiceResult<Project> {
        let assignee = UserEmail::new(request.assignee_email)?;
        let mut project = self.load_active(request.project_id).await?;
        if !project.reassign_task(request.task_id, assignee, &*self.clock)? {
            return Ok(project);
        }
        self.persist(project, "reassigned task").await
    }

    async fn load_active(&self, project_id: ProjectId) -> ProjectServiceResult<Project> {
        self.repository
            .find_by_id(project_id, false)
            .await?
            .ok_or(ProjectServiceError::ProjectNotFound(project_id))
    }

    async fn persist(&self, project: Project, message: &str) -> ProjectServiceResult<Project> {
        self.repository.save(&project).await?;
        info!(project_id = %project.id(), "{message}");
        Ok(project)
    }

    /// Resolves `requested` profiles; the owner's profile is fetched in the
    /// same lookup but may be absent.
    async fn resolve_members(
        &self,
        owner: &ProjectOwner,
        requested: &[UserEmail],
    ) -> ProjectServiceResult<Vec<ProjectMember>> {
        if requested.is_empty() {
            return Ok(Vec::new());
        }
        let lookup: Vec<UserEmail> = std::iter::once(owner.email().clone())
            .chain(requested.iter().cloned())
            .collect();
        let resolved = self.profiles.find(&lookup).await?;
        let unknown: Vec<UserEmail> = requested
            .iter()
            .filter(|email| !resolved.iter().any(|member| member.email() == *email))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            warn!(unknown = %join_emails(&unknown), "rejected unknown members");
            return Err(ProjectServiceError::UnknownMembers(unknown));
        }
        Ok(lookup
            .iter()
            .filter_map(|email| resolved.iter().find(|member| member.email() == email))
            .cloned()
            .collect())
    }
}

/// Parses and de-duplicates requested member e-mails, dropping the owner.
fn parse_member_emails(
    raw: Vec<String>,
    owner: &ProjectOwner,
) -> Result<Vec<UserEmail>, ProjectDomainError> {
    let mut emails: Vec<UserEmail> = Vec::with_capacity(raw.len());
    for value in raw {
        let email = UserEmail::new(value)?;
        if &email != owner.email() && !emails.contains(&email) {
            emails.push(email);
        }
    }
    Ok(emails)
}
