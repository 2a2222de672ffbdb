//! In-memory integration tests for report export.

use super::helpers::{
    ALICE, BOB, Fixture, alice_and_bob_project, fixture, subscribe, window_around_now,
};
use projectboard::{
    error::ErrorKind,
    project::{
        domain::TaskStatus,
        ports::Feature,
        services::{AddTaskToProjectRequest, ChangeTaskStatusRequest, ReassignTaskRequest},
    },
    report::services::GenerateReportRequest,
};
use chrono::TimeDelta;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn csv_report_lists_open_tasks(fixture: Fixture) -> Result<(), eyre::Report> {
    let project = alice_and_bob_project(&fixture).await?;
    let projects = fixture.app.projects();
    let with_tasks = projects
        .add_task_to_project(AddTaskToProjectRequest::new(
            project.id(),
            "Write spec",
            ALICE,
            BOB,
        ))
        .await?;
    let both_tasks = projects
        .add_task_to_project(AddTaskToProjectRequest::new(
            with_tasks.id(),
            "Book venue",
            ALICE,
            ALICE,
        ))
        .await?;
    let venue = both_tasks
        .tasks()
        .get(1)
        .ok_or_else(|| eyre::eyre!("missing second task"))?;
    projects
        .change_task_status(ChangeTaskStatusRequest::new(
            project.id(),
            venue.id(),
            TaskStatus::Done,
        ))
        .await?;
    subscribe(&fixture, ALICE, &[Feature::ExportReports]);

    let (from, to) = window_around_now();
    let report = fixture
        .app
        .reports()
        .generate_report(
            GenerateReportRequest::new(ALICE, project.id(), TaskStatus::Todo, from, to),
            &fixture.app.settings().csv_generator(),
        )
        .await?;

    let text = std::str::from_utf8(report.payload())?;
    eyre::ensure!(report.file_name() == "launch-tasks.csv", "unexpected file name");
    eyre::ensure!(text.contains("Write spec"), "open task is listed");
    eyre::ensure!(!text.contains("Book venue"), "done task is excluded");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn activity_after_window_keeps_task_in_report(
    fixture: Fixture,
) -> Result<(), eyre::Report> {
    let project = alice_and_bob_project(&fixture).await?;
    let projects = fixture.app.projects();
    let with_task = projects
        .add_task_to_project(AddTaskToProjectRequest::new(
            project.id(),
            "Write spec",
            ALICE,
            ALICE,
        ))
        .await?;
    let task = with_task
        .tasks()
        .first()
        .ok_or_else(|| eyre::eyre!("missing task"))?;
    let (task_id, to) = (task.id(), task.created_at());
    let from = to - TimeDelta::hours(1);

    projects
        .reassign_task(ReassignTaskRequest::new(project.id(), task_id, BOB))
        .await?;
    for status in [TaskStatus::Done, TaskStatus::Todo] {
        projects
            .change_task_status(ChangeTaskStatusRequest::new(project.id(), task_id, status))
            .await?;
    }
    subscribe(&fixture, ALICE, &[Feature::ExportReports]);

    let report = fixture
        .app
        .reports()
        .generate_report(
            GenerateReportRequest::new(ALICE, project.id(), TaskStatus::Todo, from, to),
            &fixture.app.settings().csv_generator(),
        )
        .await?;

    let text = std::str::from_utf8(report.payload())?;
    eyre::ensure!(text.lines().count() == 2, "exactly one task row expected");
    eyre::ensure!(text.contains(&task_id.to_string()), "task created in window is listed");
    eyre::ensure!(text.contains(BOB), "row shows the current assignee");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn member_without_subscription_is_refused(fixture: Fixture) -> Result<(), eyre::Report> {
    let project = alice_and_bob_project(&fixture).await?;
    subscribe(&fixture, ALICE, &[Feature::ExportReports]);

    let (from, to) = window_around_now();
    let result = fixture
        .app
        .reports()
        .generate_report(
            GenerateReportRequest::new(BOB, project.id(), TaskStatus::Todo, from, to),
            &fixture.app.settings().json_generator(),
        )
        .await;

    eyre::ensure!(
        matches!(&result, Err(err) if err.kind() == ErrorKind::ExportNotAllowed),
        "bob has no plan, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn archived_project_cannot_be_reported(fixture: Fixture) -> Result<(), eyre::Report> {
    let project = alice_and_bob_project(&fixture).await?;
    subscribe(&fixture, ALICE, &[Feature::ExportReports]);
    fixture.app.projects().archive_project(project.id()).await?;

    let (from, to) = window_around_now();
    let result = fixture
        .app
        .reports()
        .generate_report(
            GenerateReportRequest::new(ALICE, project.id(), TaskStatus::Todo, from, to),
            &fixture.app.settings().markdown_generator(),
        )
        .await;

    eyre::ensure!(
        matches!(&result, Err(err) if err.kind() == ErrorKind::NotFound),
        "archived projects are not reportable, got {result:?}"
    );
    Ok(())
}
