//! Repository port for project aggregate persistence.

use crate::project::domain::{Project, ProjectId, UserEmail};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Implementations persist the whole aggregate (members and tasks) as one
/// unit per [`save`](ProjectRepository::save) call. Concurrent saves of the
/// same project are last-write-wins.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Inserts or replaces the aggregate.
    async fn save(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Finds a project by identifier.
    ///
    /// Archived projects are returned only when `include_archived` is set.
    async fn find_by_id(
        &self,
        id: ProjectId,
        include_archived: bool,
    ) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns every project in insertion order.
    async fn find_all(&self, include_archived: bool) -> ProjectRepositoryResult<Vec<Project>>;

    /// Returns the projects owned by `owner`, in insertion order.
    async fn find_by_owner_email(
        &self,
        owner: &UserEmail,
        include_archived: bool,
    ) -> ProjectRepositoryResult<Vec<Project>>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
