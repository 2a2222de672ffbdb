//! Shared helpers for in-memory integration tests.

use chrono::{DateTime, TimeDelta, Utc};
use projectboard::{
    app::{AppSettings, InMemoryApp, InMemoryPorts},
    project::{
        domain::{Project, ProjectMember, UserEmail},
        ports::{Feature, UserSubscription},
        services::{ChangeProjectMembersRequest, CreateProjectRequest},
    },
};
use rstest::fixture;

/// Owner used by most scenarios.
pub const ALICE: &str = "alice@example.com";
/// Member used by most scenarios.
pub const BOB: &str = "bob@example.com";
/// Known user who is not a member unless a test adds them.
pub const CAROL: &str = "carol@example.com";

/// App plus the adapters behind it.
pub struct Fixture {
    pub app: InMemoryApp,
    pub ports: InMemoryPorts,
}

/// Provides an app whose user directory knows Alice, Bob, and Carol.
#[fixture]
pub fn fixture() -> Fixture {
    build_fixture(AppSettings::default())
}

/// Builds a seeded app with the given settings.
///
/// # Panics
///
/// Panics if the directory rejects a profile.
#[must_use]
pub fn build_fixture(settings: AppSettings) -> Fixture {
    let (app, ports) = InMemoryApp::in_memory(settings);
    for (address, name) in [(ALICE, "Alice"), (BOB, "Bob"), (CAROL, "Carol")] {
        ports
            .profiles
            .register(ProjectMember::new(email(address)).with_display_name(name))
            .expect("directory accepts profile");
    }
    Fixture { app, ports }
}

/// Parses a known-good e-mail.
///
/// # Panics
///
/// Panics if `value` is malformed.
#[must_use]
pub fn email(value: &str) -> UserEmail {
    UserEmail::new(value).expect("valid e-mail")
}

/// Grants `user` a plan with the given features.
///
/// # Panics
///
/// Panics if the directory rejects the subscription.
pub fn subscribe(fixture: &Fixture, user: &str, features: &[Feature]) {
    fixture
        .ports
        .subscriptions
        .subscribe(UserSubscription::new(email(user), "team").with_features(features.iter().copied()))
        .expect("directory accepts subscription");
}

/// Creates a project owned by Alice with Bob as a member.
///
/// # Errors
///
/// Returns an error if creation or the membership change fails.
pub async fn alice_and_bob_project(fixture: &Fixture) -> Result<Project, eyre::Report> {
    let projects = fixture.app.projects();
    let created = projects
        .create_project(CreateProjectRequest::new("Launch", "Ship the beta", ALICE))
        .await?;
    Ok(projects
        .change_project_members(ChangeProjectMembersRequest::new(
            created.id(),
            [BOB.to_owned()],
        ))
        .await?)
}

/// Returns a window of one hour either side of now.
#[must_use]
pub fn window_around_now() -> (DateTime<Utc>, DateTime<Utc>) {
    let now = Utc::now();
    (now - TimeDelta::hours(1), now + TimeDelta::hours(1))
}
