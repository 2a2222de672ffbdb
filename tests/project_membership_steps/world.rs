//! Shared world state for project membership BDD scenarios.

use projectboard::{
    app::{AppSettings, InMemoryApp, InMemoryPorts},
    project::{
        domain::{Project, ProjectMember, UserEmail},
        services::ProjectServiceError,
    },
};
use rstest::fixture;

/// Users the directory knows in every scenario.
const KNOWN_USERS: [(&str, &str); 3] = [
    ("alice@example.com", "Alice"),
    ("bob@example.com", "Bob"),
    ("carol@example.com", "Carol"),
];

/// Scenario world for membership behaviour tests.
pub struct MembershipWorld {
    pub app: InMemoryApp,
    pub ports: InMemoryPorts,
    pub project: Option<Project>,
    pub last_result: Option<Result<Project, ProjectServiceError>>,
}

impl MembershipWorld {
    /// Creates a world whose user directory knows Alice, Bob, and Carol.
    ///
    /// # Panics
    ///
    /// Panics if the directory rejects a profile.
    #[must_use]
    pub fn new() -> Self {
        let (app, ports) = InMemoryApp::in_memory(AppSettings::default());
        for (address, name) in KNOWN_USERS {
            let email = UserEmail::new(address).expect("valid seed e-mail");
            ports
                .profiles
                .register(ProjectMember::new(email).with_display_name(name))
                .expect("directory accepts profile");
        }
        Self {
            app,
            ports,
            project: None,
            last_result: None,
        }
    }

    /// Returns the scenario's project.
    ///
    /// # Errors
    ///
    /// Returns an error when no project has been created yet.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Records a service result, keeping the project current on success.
    pub fn record(&mut self, result: Result<Project, ProjectServiceError>) {
        if let Ok(ref updated) = result {
            self.project = Some(updated.clone());
        }
        self.last_result = Some(result);
    }
}

impl Default for MembershipWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MembershipWorld {
    MembershipWorld::default()
}

/// Splits a comma-separated list of e-mails.
pub fn split_emails(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
