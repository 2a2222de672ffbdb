//! Outbound port to the subscription service and the entitlement it yields.

use crate::project::domain::UserEmail;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Capability granted by a subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
    /// Project reports may be exported.
    ExportReports,
    /// No cap on owned projects.
    UnlimitedProjects,
    /// Support requests are prioritised.
    PrioritySupport,
}

/// A user's current plan as reported by the subscription service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubscription {
    user_email: UserEmail,
    plan: String,
    features: BTreeSet<Feature>,
}

impl UserSubscription {
    /// Creates a subscription without features.
    #[must_use]
    pub fn new(user_email: UserEmail, plan: impl Into<String>) -> Self {
        Self {
            user_email,
            plan: plan.into(),
            features: BTreeSet::new(),
        }
    }

    /// Adds granted features.
    #[must_use]
    pub fn with_features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.features.extend(features);
        self
    }

    /// Returns the subscriber.
    #[must_use]
    pub const fn user_email(&self) -> &UserEmail {
        &self.user_email
    }

    /// Returns the plan name.
    #[must_use]
    pub fn plan(&self) -> &str {
        &self.plan
    }

    /// Returns the granted features.
    #[must_use]
    pub const fn features(&self) -> &BTreeSet<Feature> {
        &self.features
    }

    /// Returns whether the plan grants `feature`.
    #[must_use]
    pub fn grants(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Returns whether the plan allows report export.
    #[must_use]
    pub fn is_export_allowed(&self) -> bool {
        self.grants(Feature::ExportReports)
    }
}

/// Result type for subscription lookups.
pub type SubscriptionClientResult<T> = Result<T, SubscriptionClientError>;

/// Looks up a user's current subscription.
#[async_trait]
pub trait UserSubscriptionClient: Send + Sync {
    /// Returns the user's subscription, or `None` when the user has none.
    async fn get(&self, user_email: &UserEmail)
    -> SubscriptionClientResult<Option<UserSubscription>>;
}

/// Errors returned by subscription adapters.
#[derive(Debug, Clone, Error)]
pub enum SubscriptionClientError {
    /// The service could not be reached or answered with a failure.
    #[error("subscription service unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl SubscriptionClientError {
    /// Wraps a transport error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
