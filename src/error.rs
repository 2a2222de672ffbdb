//! Logical failure taxonomy shared by the project and report services.
//!
//! Inbound adapters map [`ErrorKind`] onto their own status codes instead of
//! matching on every service error variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-facing classification of a use-case failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A referenced project or task does not exist or is archived.
    NotFound,
    /// A user is not a current member of the project.
    InvalidAssignment,
    /// The caller's subscription does not grant report export.
    ExportNotAllowed,
    /// A collaborating service failed; the core does not retry.
    UpstreamUnavailable,
    /// The request carried malformed or contradictory values.
    InvalidInput,
    /// The storage adapter failed.
    Persistence,
}

impl ErrorKind {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidAssignment => "invalid_assignment",
            Self::ExportNotAllowed => "export_not_allowed",
            Self::UpstreamUnavailable => "upstream_unavailable",
            Self::InvalidInput => "invalid_input",
            Self::Persistence => "persistence",
        }
    }

    /// Returns whether repeating the same request could succeed.
    ///
    /// The services never retry; this only informs adapters.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::UpstreamUnavailable | Self::Persistence)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
