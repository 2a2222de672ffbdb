//! In-memory stand-ins for the user-profile and subscription services.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{ProjectMember, UserEmail},
    ports::{
        SubscriptionClientError, SubscriptionClientResult, UserProfileClient,
        UserProfileClientError, UserProfileClientResult, UserSubscription, UserSubscriptionClient,
    },
};

/// Thread-safe registry of known user profiles.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    profiles: Arc<RwLock<HashMap<UserEmail, ProjectMember>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces a profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserProfileClientError::Unavailable`] when the lock is
    /// poisoned.
    pub fn register(&self, member: ProjectMember) -> UserProfileClientResult<()> {
        let mut profiles = self.profiles.write().map_err(|err| {
            UserProfileClientError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        profiles.insert(member.email().clone(), member);
        Ok(())
    }
}

#[async_trait]
impl UserProfileClient for InMemoryUserDirectory {
    async fn find(&self, emails: &[UserEmail]) -> UserProfileClientResult<Vec<ProjectMember>> {
        let profiles = self.profiles.read().map_err(|err| {
            UserProfileClientError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(emails
            .iter()
            .filter_map(|email| profiles.get(email).cloned())
            .collect())
    }
}

/// Thread-safe registry of user subscriptions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySubscriptionDirectory {
    subscriptions: Arc<RwLock<HashMap<UserEmail, UserSubscription>>>,
}

impl InMemorySubscriptionDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `subscription` as its user's current plan.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionClientError::Unavailable`] when the lock is
    /// poisoned.
    pub fn subscribe(&self, subscription: UserSubscription) -> SubscriptionClientResult<()> {
        let mut subscriptions = self.subscriptions.write().map_err(|err| {
            SubscriptionClientError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        subscriptions.insert(subscription.user_email().clone(), subscription);
        Ok(())
    }

    /// Removes a user's plan.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionClientError::Unavailable`] when the lock is
    /// poisoned.
    pub fn unsubscribe(&self, user_email: &UserEmail) -> SubscriptionClientResult<()> {
        let mut subscriptions = self.subscriptions.write().map_err(|err| {
            SubscriptionClientError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        subscriptions.remove(user_email);
        Ok(())
    }
}

#[async_trait]
impl UserSubscriptionClient for InMemorySubscriptionDirectory {
    async fn get(
        &self,
        user_email: &UserEmail,
    ) -> SubscriptionClientResult<Option<UserSubscription>> {
        let subscriptions = self.subscriptions.read().map_err(|err| {
            SubscriptionClientError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(subscriptions.get(user_email).cloned())
    }
}
