//! Outbound port to the user-profile service.

use crate::project::domain::{ProjectMember, UserEmail};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user-profile lookups.
pub type UserProfileClientResult<T> = Result<T, UserProfileClientError>;

/// Resolves raw e-mail identities into project members.
#[async_trait]
pub trait UserProfileClient: Send + Sync {
    /// Returns a member for every known e-mail in `emails`.
    ///
    /// Unknown e-mails are omitted from the result rather than reported as
    /// errors.
    async fn find(&self, emails: &[UserEmail]) -> UserProfileClientResult<Vec<ProjectMember>>;
}

/// Errors returned by user-profile adapters.
#[derive(Debug, Clone, Error)]
pub enum UserProfileClientError {
    /// The service could not be reached or answered with a failure.
    #[error("user-profile service unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserProfileClientError {
    /// Wraps a transport error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
