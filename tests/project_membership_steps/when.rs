//! When steps for project membership BDD scenarios.

use super::world::{MembershipWorld, run_async, split_emails};
use projectboard::project::services::{AddTaskToProjectRequest, ChangeProjectMembersRequest};
use rstest_bdd_macros::when;

#[when(r#"the members are replaced with "{emails}""#)]
fn members_replaced(world: &mut MembershipWorld, emails: String) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let result = run_async(world.app.projects().change_project_members(
        ChangeProjectMembersRequest::new(project_id, split_emails(&emails)),
    ));
    world.record(result);
    Ok(())
}

#[when(r#""{actor}" adds the task "{title}" assigned to "{assignee}""#)]
fn task_added(
    world: &mut MembershipWorld,
    actor: String,
    title: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let result = run_async(world.app.projects().add_task_to_project(
        AddTaskToProjectRequest::new(project_id, title, actor, assignee),
    ));
    world.record(result);
    Ok(())
}

#[when("the project is archived")]
fn project_archived(world: &mut MembershipWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let result = run_async(world.app.projects().archive_project(project_id));
    world.record(result);
    Ok(())
}
