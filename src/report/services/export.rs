//! Service layer for subscription-gated report export.

use crate::error::ErrorKind;
use crate::project::{
    domain::{ProjectDomainError, ProjectId, TaskCriteria, TaskStatus, UserEmail},
    ports::{
        ProjectRepository, ProjectRepositoryError, SubscriptionClientError, TaskRepository,
        TaskRepositoryError, UserSubscription, UserSubscriptionClient,
    },
};
use crate::report::{
    domain::{ProjectSummary, ProjectSummaryReport},
    ports::{ReportGenerator, ReportGeneratorError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Request payload for generating a project report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReportRequest {
    triggered_by: String,
    project_id: ProjectId,
    status: TaskStatus,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl GenerateReportRequest {
    /// Creates a request for the tasks of `project_id` in `status` whose
    /// latest activity falls within `[from, to]`.
    ///
    /// `triggered_by` is the authenticated caller's e-mail.
    #[must_use]
    pub fn new(
        triggered_by: impl Into<String>,
        project_id: ProjectId,
        status: TaskStatus,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Self {
        Self {
            triggered_by: triggered_by.into(),
            project_id,
            status,
            from,
            to,
        }
    }
}

/// Service-level errors for report generation.
#[derive(Debug, Error)]
pub enum ReportServiceError {
    /// The caller's subscription does not include report export.
    #[error("report export is not included in the subscription of {0}")]
    ExportNotAllowed(UserEmail),

    /// The project does not exist or is archived.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Request validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),

    /// Project lookup failed.
    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),

    /// Task lookup failed.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),

    /// The subscription service failed.
    #[error(transparent)]
    Subscription(#[from] SubscriptionClientError),

    /// The injected generator failed.
    #[error(transparent)]
    Generator(#[from] ReportGeneratorError),
}

impl ReportServiceError {
    /// Classifies the failure for inbound adapters.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ExportNotAllowed(_) => ErrorKind::ExportNotAllowed,
            Self::ProjectNotFound(_) => ErrorKind::NotFound,
            Self::Domain(_) | Self::Generator(_) => ErrorKind::InvalidInput,
            Self::ProjectRepository(_) | Self::TaskRepository(_) => ErrorKind::Persistence,
            Self::Subscription(_) => ErrorKind::UpstreamUnavailable,
        }
    }
}

/// Result type for report service operations.
pub type ReportServiceResult<T> = Result<T, ReportServiceError>;

/// Report export orchestration service.
#[derive(Clone)]
pub struct ReportService<P, T, S, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    S: UserSubscriptionClient,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    subscriptions: Arc<S>,
    clock: Arc<C>,
}

impl<P, T, S, C> ReportService<P, T, S, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    S: UserSubscriptionClient,
    C: Clock + Send + Sync,
{
    /// Creates a new report service.
    #[must_use]
    pub const fn new(
        projects: Arc<P>,
        tasks: Arc<T>,
        subscriptions: Arc<S>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            projects,
            tasks,
            subscriptions,
            clock,
        }
    }

    /// Generates a report with the caller-supplied `generator`.
    ///
    /// The caller's entitlement is checked before any project or task data
    /// is read.
    ///
    /// # Errors
    ///
    /// Returns [`ReportServiceError::ExportNotAllowed`] when the caller has
    /// no subscription or one without export,
    /// [`ReportServiceError::ProjectNotFound`] for unknown or archived
    /// projects, [`ReportServiceError::Domain`] for a malformed caller
    /// e-mail or a window that ends before it starts, and the wrapped port
    /// or generator error otherwise.
    #[instrument(
        skip(self, request, generator),
        fields(project_id = %request.project_id, triggered_by = %request.triggered_by)
    )]
    pub async fn generate_report<G>(
        &self,
        request: GenerateReportRequest,
        generator: &G,
    ) -> ReportServiceResult<ProjectSummaryReport>
    where
        G: ReportGenerator + ?Sized,
    {
        let GenerateReportRequest {
            triggered_by,
            project_id,
            status,
            from,
            to,
        } = request;
        let caller = UserEmail::new(triggered_by)?;
        self.ensure_export_allowed(caller).await?;

        let project = self
            .projects
            .find_by_id(project_id, false)
            .await?
            .ok_or(ReportServiceError::ProjectNotFound(project_id))?;
        let criteria = TaskCriteria::new(project_id, status, from, to)?;
        let tasks = self.tasks.get_tasks(&criteria).await?;

        let summary = ProjectSummary::new(&project, criteria, tasks, self.clock.utc());
        let report = generator.generate(&summary)?;
        info!(
            task_count = summary.tasks().len(),
            file_name = report.file_name(),
            "generated report"
        );
        Ok(report)
    }

    async fn ensure_export_allowed(&self, caller: UserEmail) -> ReportServiceResult<()> {
        let subscription = self.subscriptions.get(&caller).await?;
        let allowed = subscription
            .as_ref()
            .is_some_and(UserSubscription::is_export_allowed);
        if !allowed {
            warn!(
                plan = subscription.as_ref().map(|plan| plan.plan()),
                "report export denied"
            );
            return Err(ReportServiceError::ExportNotAllowed(caller));
        }
        Ok(())
    }
}
