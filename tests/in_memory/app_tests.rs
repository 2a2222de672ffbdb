//! Integration tests for settings-driven generator wiring.

use super::helpers::{
    ALICE, BOB, alice_and_bob_project, build_fixture, subscribe, window_around_now,
};
use projectboard::{
    app::AppSettings,
    project::{domain::TaskStatus, ports::Feature, services::AddTaskToProjectRequest},
    report::services::GenerateReportRequest,
};
use rstest::rstest;

const SETTINGS: &str = r#"{
    "report_file_prefix": "acme",
    "markdown_template": "{{ project.name }} has {{ tasks | length }} {{ criteria.status }} task(s)"
}"#;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn settings_shape_generated_reports() -> Result<(), eyre::Report> {
    let fixture = build_fixture(AppSettings::from_json(SETTINGS)?);
    let project = alice_and_bob_project(&fixture).await?;
    fixture
        .app
        .projects()
        .add_task_to_project(AddTaskToProjectRequest::new(
            project.id(),
            "Write spec",
            ALICE,
            BOB,
        ))
        .await?;
    subscribe(&fixture, ALICE, &[Feature::ExportReports]);

    let (from, to) = window_around_now();
    let request = GenerateReportRequest::new(ALICE, project.id(), TaskStatus::Todo, from, to);
    let settings = fixture.app.settings();
    let markdown = fixture
        .app
        .reports()
        .generate_report(request.clone(), &settings.markdown_generator())
        .await?;
    let json = fixture
        .app
        .reports()
        .generate_report(request, &settings.json_generator())
        .await?;

    eyre::ensure!(
        markdown.file_name() == "acme-launch-tasks.md",
        "unexpected file name {}",
        markdown.file_name()
    );
    eyre::ensure!(
        markdown.payload() == b"Launch has 1 TODO task(s)",
        "unexpected markdown payload"
    );
    eyre::ensure!(
        json.file_name() == "acme-launch-tasks.json",
        "unexpected file name {}",
        json.file_name()
    );
    Ok(())
}
