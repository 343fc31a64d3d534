//! Formatting and reporting for health check results

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::runner::HealthCheckReport;
use crate::build_info;

/// Formats a health check report as a pretty table
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();

    // Header row
    builder.push_record(["System", "Status", "Duration", "Message"]);

    // One row per check, in the order they ran
    for (name, result) in &report.results {
        let duration_str = format!("{:.2?}", result.duration);
        builder.push_record([
            name.as_str(),
            &result.status.as_colored_str(),
            &duration_str,
            &result.message,
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    // Version line, then the table, then the summary
    let mut output = format!("jbe {}\n", build_info::version_string());
    output.push_str(&table.to_string());
    output.push('\n');
    output.push_str(&format_summary(report));

    output
}

/// Formats the summary section of the report
fn format_summary(report: &HealthCheckReport) -> String {
    let mut summary = format!("\n{}\n", "Summary".bold().underline());
    summary.push_str(&format!("  Total checks: {}\n", report.total));
    summary.push_str(&format!("  {} Passed: {}\n", "✓".green(), report.passed));

    if report.warned > 0 {
        summary.push_str(&format!("  {} Warned: {}\n", "⚠".yellow(), report.warned));
    }

    if report.failed > 0 {
        summary.push_str(&format!("  {} Failed: {}\n", "✗".red(), report.failed));
    }

    // Overall status
    summary.push('\n');
    let overall = match (report.is_healthy(), report.has_warnings()) {
        (true, true) => "Overall: HEALTHY (with warnings)".yellow().bold(),
        (true, false) => "Overall: HEALTHY".green().bold(),
        (false, _) => "Overall: UNHEALTHY".red().bold(),
    };
    summary.push_str(&format!("  {}\n", overall));

    summary
}

/// Prints a health check report to stdout, followed by per-check details
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    // Details only for checks that reported any
    for (name, result) in &report.results {
        if !result.details.is_empty() {
            println!("\n{} Details:", name.bold());
            println!("{}", result.details.join("\n"));
        }
    }
}
