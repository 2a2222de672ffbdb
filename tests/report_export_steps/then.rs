//! Then steps for report export BDD scenarios.

use super::world::ReportWorld;
use projectboard::{error::ErrorKind, report::services::ReportServiceError};
use rstest_bdd_macros::then;

#[then(r#"the report is named "{file_name}""#)]
fn report_named(world: &ReportWorld, file_name: String) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.file_name() != file_name {
        return Err(eyre::eyre!(
            "expected file {file_name}, found {}",
            report.file_name()
        ));
    }
    Ok(())
}

#[then(r#"the report lists "{title}""#)]
fn report_lists(world: &ReportWorld, title: String) -> Result<(), eyre::Report> {
    let text = std::str::from_utf8(world.report()?.payload())?;
    if !text.contains(&title) {
        return Err(eyre::eyre!("report does not mention {title}:\n{text}"));
    }
    Ok(())
}

#[then(r#"the report does not list "{title}""#)]
fn report_omits(world: &ReportWorld, title: String) -> Result<(), eyre::Report> {
    let text = std::str::from_utf8(world.report()?.payload())?;
    if text.contains(&title) {
        return Err(eyre::eyre!("report unexpectedly mentions {title}:\n{text}"));
    }
    Ok(())
}

#[then("the export is refused")]
fn export_refused(world: &ReportWorld) -> Result<(), eyre::Report> {
    match world.last_report.as_ref() {
        Some(Err(err @ ReportServiceError::ExportNotAllowed(_)))
            if err.kind() == ErrorKind::ExportNotAllowed =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!("expected export refusal, got {other:?}")),
    }
}
