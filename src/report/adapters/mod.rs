//! Report generator implementations.
//!
//! Each generator names its file `<prefix>-<project-slug>-tasks.<ext>`,
//! where the prefix is optional.

mod csv;
mod json;
mod markdown;

pub use csv::CsvReportGenerator;
pub use json::JsonReportGenerator;
pub use markdown::{DEFAULT_MARKDOWN_TEMPLATE, MarkdownReportGenerator};

use crate::report::domain::ProjectSummary;
use chrono::{DateTime, SecondsFormat, Utc};

fn report_file_name(prefix: Option<&str>, summary: &ProjectSummary, extension: &str) -> String {
    let slug = summary.slug();
    prefix.map_or_else(
        || format!("{slug}-tasks.{extension}"),
        |value| format!("{value}-{slug}-tasks.{extension}"),
    )
}

fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim().trim_matches('-');
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn rfc3339(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}
