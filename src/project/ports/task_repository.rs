//! Query port over tasks owned by project aggregates.

use crate::project::domain::{ProjectTask, TaskCriteria};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task query operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Read-only task lookup contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns the tasks matching `criteria`, in the project's task order.
    ///
    /// The window selects tasks by creation time. See
    /// [`TaskCriteria::matches`] for the boundary semantics.
    async fn get_tasks(&self, criteria: &TaskCriteria) -> TaskRepositoryResult<Vec<ProjectTask>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
