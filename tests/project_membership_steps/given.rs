//! Given steps for project membership BDD scenarios.

use super::world::{MembershipWorld, run_async};
use eyre::WrapErr;
use projectboard::project::services::{ChangeProjectMembersRequest, CreateProjectRequest};
use rstest_bdd_macros::given;

#[given(r#"a project "{name}" owned by "{owner}""#)]
fn project_owned_by(
    world: &mut MembershipWorld,
    name: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .app
            .projects()
            .create_project(CreateProjectRequest::new(name, "", owner)),
    )
    .wrap_err("create project for membership scenario")?;
    world.project = Some(created);
    Ok(())
}

#[given(r#""{email}" has joined the project"#)]
fn member_has_joined(world: &mut MembershipWorld, email: String) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let updated = run_async(
        world
            .app
            .projects()
            .change_project_members(ChangeProjectMembersRequest::new(project_id, [email])),
    )
    .wrap_err("add member in scenario setup")?;
    world.project = Some(updated);
    Ok(())
}
