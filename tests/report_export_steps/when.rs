//! When steps for report export BDD scenarios.

use super::world::{ReportWorld, run_async};
use chrono::{TimeDelta, Utc};
use projectboard::{
    project::domain::TaskStatus,
    report::{ports::ReportGenerator, services::GenerateReportRequest},
};
use rstest_bdd_macros::when;

#[when(r#""{user}" requests a "{format}" report of "{status}" tasks"#)]
fn report_requested(
    world: &mut ReportWorld,
    user: String,
    format: String,
    status: String,
) -> Result<(), eyre::Report> {
    let wanted = TaskStatus::try_from(status.as_str())?;
    let project_id = world.project()?.id();
    let settings = world.app.settings();
    let generator: Box<dyn ReportGenerator> = match format.as_str() {
        "csv" => Box::new(settings.csv_generator()),
        "json" => Box::new(settings.json_generator()),
        "markdown" => Box::new(settings.markdown_generator()),
        other => return Err(eyre::eyre!("unsupported report format {other}")),
    };
    let now = Utc::now();
    let request = GenerateReportRequest::new(
        user,
        project_id,
        wanted,
        now - TimeDelta::hours(1),
        now + TimeDelta::hours(1),
    );
    let result = run_async(world.app.reports().generate_report(request, &*generator));
    world.last_report = Some(result);
    Ok(())
}
