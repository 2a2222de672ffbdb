//! Then steps for project membership BDD scenarios.

use super::world::{MembershipWorld, run_async, split_emails};
use projectboard::project::services::ProjectServiceError;
use rstest_bdd_macros::then;

#[then(r#"the members are "{emails}""#)]
fn members_are(world: &MembershipWorld, emails: String) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let stored = run_async(world.app.projects().get_project_by_id(project_id))?;
    let actual: Vec<String> = stored
        .members()
        .iter()
        .map(|member| member.email().to_string())
        .collect();
    let expected = split_emails(&emails);
    if actual != expected {
        return Err(eyre::eyre!("expected members {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the project has {count:usize} tasks")]
fn project_task_count(world: &MembershipWorld, count: usize) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let stored = run_async(world.app.projects().get_project_by_id(project_id))?;
    if stored.tasks().len() != count {
        return Err(eyre::eyre!(
            "expected {count} tasks, found {}",
            stored.tasks().len()
        ));
    }
    Ok(())
}

#[then(r#"the task "{title}" is "{status}" and assigned to "{assignee}""#)]
fn task_state(
    world: &MembershipWorld,
    title: String,
    status: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let task = world
        .project()?
        .tasks()
        .iter()
        .find(|task| task.title() == title)
        .ok_or_else(|| eyre::eyre!("no task titled {title}"))?;
    if task.status().as_str() != status {
        return Err(eyre::eyre!("expected status {status}, found {}", task.status()));
    }
    if task.assigned_to().as_str() != assignee {
        return Err(eyre::eyre!(
            "expected assignee {assignee}, found {}",
            task.assigned_to()
        ));
    }
    Ok(())
}

#[then(r#"the request fails with "{kind}""#)]
fn request_fails_with(world: &MembershipWorld, kind: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing request result"))?;
    match result {
        Err(err) if err.kind().as_str() == kind => Ok(()),
        Err(err) => Err(eyre::eyre!("expected {kind} failure, got {}", err.kind())),
        Ok(_) => Err(eyre::eyre!("expected {kind} failure, request succeeded")),
    }
}

#[then("the project can no longer be found")]
fn project_not_found(world: &MembershipWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let lookup = run_async(world.app.projects().get_project_by_id(project_id));
    match lookup {
        Err(ProjectServiceError::ProjectNotFound(id)) if id == project_id => {}
        other => return Err(eyre::eyre!("expected not found, got {other:?}")),
    }
    let listed = run_async(world.app.projects().get_all_projects())?;
    if !listed.is_empty() {
        return Err(eyre::eyre!("archived project still listed"));
    }
    if world.ports.projects.len()? != 1 {
        return Err(eyre::eyre!("archived project must remain stored"));
    }
    Ok(())
}
