//! In-memory project store serving both repository ports.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{Project, ProjectId, ProjectTask, TaskCriteria, UserEmail},
    ports::{
        ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, TaskRepository,
        TaskRepositoryError, TaskRepositoryResult,
    },
};

/// Thread-safe in-memory project repository.
///
/// Tasks live inside their project aggregates, so the same store also
/// answers [`TaskRepository`] queries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: HashMap<ProjectId, Project>,
    insertion_order: Vec<ProjectId>,
}

impl InMemoryProjectState {
    fn ordered(&self, include_archived: bool) -> impl Iterator<Item = &Project> + '_ {
        self.insertion_order
            .iter()
            .filter_map(|id| self.projects.get(id))
            .filter(move |project| include_archived || !project.is_archived())
    }
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored projects, archived ones included.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn len(&self) -> ProjectRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.projects.len())
    }

    /// Returns whether the store holds no projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn is_empty(&self) -> ProjectRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state
            .projects
            .insert(project.id(), project.clone())
            .is_none()
        {
            state.insertion_order.push(project.id());
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: ProjectId,
        include_archived: bool,
    ) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .projects
            .get(&id)
            .filter(|project| include_archived || !project.is_archived())
            .cloned())
    }

    async fn find_all(&self, include_archived: bool) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.ordered(include_archived).cloned().collect())
    }

    async fn find_by_owner_email(
        &self,
        owner: &UserEmail,
        include_archived: bool,
    ) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .ordered(include_archived)
            .filter(|project| project.owner().email() == owner)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TaskRepository for InMemoryProjectRepository {
    async fn get_tasks(&self, criteria: &TaskCriteria) -> TaskRepositoryResult<Vec<ProjectTask>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .projects
            .get(&criteria.project_id())
            .map(|project| {
                project
                    .tasks()
                    .iter()
                    .filter(|task| criteria.matches(task))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
