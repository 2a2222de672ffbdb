//! Composition root wiring ports into the project and report services.
//!
//! Nothing here is global: callers build the adapters they want, hand them
//! to [`ProjectApp::build`], and keep the returned value for the lifetime of
//! their process.

use crate::project::{
    adapters::memory::{
        InMemoryProjectRepository, InMemorySubscriptionDirectory, InMemoryUserDirectory,
    },
    ports::{ProjectRepository, TaskRepository, UserProfileClient, UserSubscriptionClient},
    services::ProjectService,
};
use crate::report::{
    adapters::{CsvReportGenerator, JsonReportGenerator, MarkdownReportGenerator},
    services::ReportService,
};
use mockable::{Clock, DefaultClock};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Tunables for report generation.
///
/// Every field is optional; missing fields fall back to defaults. A
/// representative JSON document is:
///
/// ```json
/// {
///   "report_file_prefix": "acme",
///   "markdown_template": "# {{ project.name }}"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppSettings {
    /// Prefix prepended to every generated report file name.
    pub report_file_prefix: Option<String>,
    /// Template replacing the built-in Markdown report layout.
    pub markdown_template: Option<String>,
}

/// Error returned when settings cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid application settings: {0}")]
pub struct SettingsError(#[from] serde_json::Error);

impl AppSettings {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the document is malformed or names an
    /// unknown field.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Returns a CSV generator honouring the configured prefix.
    #[must_use]
    pub fn csv_generator(&self) -> CsvReportGenerator {
        let mut generator = CsvReportGenerator::new();
        if let Some(prefix) = self.report_file_prefix.as_deref() {
            generator = generator.with_file_prefix(prefix);
        }
        generator
    }

    /// Returns a JSON generator honouring the configured prefix.
    #[must_use]
    pub fn json_generator(&self) -> JsonReportGenerator {
        let mut generator = JsonReportGenerator::new();
        if let Some(prefix) = self.report_file_prefix.as_deref() {
            generator = generator.with_file_prefix(prefix);
        }
        generator
    }

    /// Returns a Markdown generator honouring the configured prefix and
    /// template.
    #[must_use]
    pub fn markdown_generator(&self) -> MarkdownReportGenerator {
        let mut generator = MarkdownReportGenerator::new();
        if let Some(template) = self.markdown_template.as_deref() {
            generator = generator.with_template(template);
        }
        if let Some(prefix) = self.report_file_prefix.as_deref() {
            generator = generator.with_file_prefix(prefix);
        }
        generator
    }
}

/// Outbound adapters required by the services.
#[derive(Debug)]
pub struct AppPorts<P, T, U, S> {
    /// Project persistence.
    pub projects: Arc<P>,
    /// Task queries.
    pub tasks: Arc<T>,
    /// User-profile lookups.
    pub profiles: Arc<U>,
    /// Subscription lookups.
    pub subscriptions: Arc<S>,
}

/// Both use-case services built over one set of ports.
pub struct ProjectApp<P, T, U, S, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    U: UserProfileClient,
    S: UserSubscriptionClient,
    C: Clock + Send + Sync,
{
    projects: ProjectService<P, U, C>,
    reports: ReportService<P, T, S, C>,
    settings: AppSettings,
}

impl<P, T, U, S, C> ProjectApp<P, T, U, S, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    U: UserProfileClient,
    S: UserSubscriptionClient,
    C: Clock + Send + Sync,
{
    /// Constructs the services from explicit ports.
    #[must_use]
    pub fn build(ports: AppPorts<P, T, U, S>, clock: Arc<C>, settings: AppSettings) -> Self {
        let AppPorts {
            projects,
            tasks,
            profiles,
            subscriptions,
        } = ports;
        Self {
            projects: ProjectService::new(Arc::clone(&projects), profiles, Arc::clone(&clock)),
            reports: ReportService::new(projects, tasks, subscriptions, clock),
            settings,
        }
    }

    /// Returns the project use cases.
    #[must_use]
    pub const fn projects(&self) -> &ProjectService<P, U, C> {
        &self.projects
    }

    /// Returns the report use cases.
    #[must_use]
    pub const fn reports(&self) -> &ReportService<P, T, S, C> {
        &self.reports
    }

    /// Returns the settings the app was built with.
    #[must_use]
    pub const fn settings(&self) -> &AppSettings {
        &self.settings
    }
}

/// App wired entirely to in-memory adapters.
pub type InMemoryApp = ProjectApp<
    InMemoryProjectRepository,
    InMemoryProjectRepository,
    InMemoryUserDirectory,
    InMemorySubscriptionDirectory,
    DefaultClock,
>;

/// Handles to the adapters behind an [`InMemoryApp`], for seeding.
pub type InMemoryPorts = AppPorts<
    InMemoryProjectRepository,
    InMemoryProjectRepository,
    InMemoryUserDirectory,
    InMemorySubscriptionDirectory,
>;

impl InMemoryApp {
    /// Builds an app over fresh in-memory adapters and the system clock.
    ///
    /// The returned ports share state with the app.
    #[must_use]
    pub fn in_memory(settings: AppSettings) -> (Self, InMemoryPorts) {
        let store = Arc::new(InMemoryProjectRepository::new());
        let ports = AppPorts {
            projects: Arc::clone(&store),
            tasks: store,
            profiles: Arc::new(InMemoryUserDirectory::new()),
            subscriptions: Arc::new(InMemorySubscriptionDirectory::new()),
        };
        let handles = AppPorts {
            projects: Arc::clone(&ports.projects),
            tasks: Arc::clone(&ports.tasks),
            profiles: Arc::clone(&ports.profiles),
            subscriptions: Arc::clone(&ports.subscriptions),
        };
        (Self::build(ports, Arc::new(DefaultClock), settings), handles)
    }
}
