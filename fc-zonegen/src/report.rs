use std::path::Path;

use colored::Colorize;
use wwn_zone_core::{format_summary, ZonePlan};

use crate::verify::VerifyReport;

/// Render the run summary for terminal output.
pub fn render_summary(plan: &ZonePlan, hosts: usize, targets: usize) -> String {
    format_summary(plan, hosts, targets).cyan().to_string()
}

/// Render verification findings as `warning: <code>: <message>` lines.
pub fn render_issues(report: &VerifyReport) -> String {
    report
        .issues
        .iter()
        .map(|issue| {
            format!("warning: {}: {}", issue.code, issue.message)
                .yellow()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the closing line naming the written file.
pub fn render_written(path: &Path, lines: usize) -> String {
    format!(
        "Finished writing {lines} zone configuration lines to {}",
        path.display()
    )
    .green()
    .to_string()
}
