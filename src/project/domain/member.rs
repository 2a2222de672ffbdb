//! Identities participating in a project.

use super::UserEmail;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The user who created a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectOwner(UserEmail);

impl ProjectOwner {
    /// Creates an owner identity.
    #[must_use]
    pub const fn new(email: UserEmail) -> Self {
        Self(email)
    }

    /// Returns the owner's e-mail.
    #[must_use]
    pub const fn email(&self) -> &UserEmail {
        &self.0
    }
}

impl fmt::Display for ProjectOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A user with access to a project's tasks.
///
/// Membership checks compare e-mails only; the display name is whatever the
/// user-profile service reported at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    email: UserEmail,
    display_name: Option<String>,
}

impl ProjectMember {
    /// Creates a member with no resolved display name.
    #[must_use]
    pub const fn new(email: UserEmail) -> Self {
        Self {
            email,
            display_name: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        let name = display_name.into();
        let trimmed = name.trim();
        self.display_name = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Returns the member's e-mail.
    #[must_use]
    pub const fn email(&self) -> &UserEmail {
        &self.email
    }

    /// Returns the resolved display name, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

impl From<&ProjectOwner> for ProjectMember {
    fn from(owner: &ProjectOwner) -> Self {
        Self::new(owner.email().clone())
    }
}

/// The member who created a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskOwner(UserEmail);

impl TaskOwner {
    /// Creates a task owner identity.
    #[must_use]
    pub const fn new(email: UserEmail) -> Self {
        Self(email)
    }

    /// Returns the owner's e-mail.
    #[must_use]
    pub const fn email(&self) -> &UserEmail {
        &self.0
    }
}

impl fmt::Display for TaskOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
