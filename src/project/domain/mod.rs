//! Domain model for projects, their members, and their tasks.
//!
//! A [`Project`] is the aggregate: it owns its members and tasks and is
//! always persisted as one unit. Tasks refer back to their project only by
//! [`ProjectId`].

mod criteria;
mod error;
mod ids;
mod member;
mod project;
mod task;

pub use criteria::TaskCriteria;
pub use error::{ParseTaskStatusError, ProjectDomainError};
pub use ids::{ProjectId, TaskId, UserEmail};
pub use member::{ProjectMember, ProjectOwner, TaskOwner};
pub use project::{PersistedProjectData, Project};
pub use task::{NewTask, PersistedTaskData, ProjectTask, StatusChange, TaskStatus};
