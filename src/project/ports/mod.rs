//! Port contracts for project management.
//!
//! Ports define infrastructure-agnostic interfaces used by the project and
//! report services.

pub mod repository;
pub mod subscription;
pub mod task_repository;
pub mod user_profile;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
pub use subscription::{
    Feature, SubscriptionClientError, SubscriptionClientResult, UserSubscription,
    UserSubscriptionClient,
};
pub use task_repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use user_profile::{UserProfileClient, UserProfileClientError, UserProfileClientResult};
