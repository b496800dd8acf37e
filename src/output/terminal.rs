//! Terminal output formatting with colors.

use std::time::Duration;

use colored::Colorize;

use crate::algorithm::{Algorithm, WorkFactor};
use crate::report::RunReport;

/// Format a run report for human-readable terminal output.
///
/// One line per work factor, in request order:
/// `<work_factor>, <mean_seconds> s`, with the mean printed to microsecond
/// precision.
pub fn format_report(report: &RunReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {} ({} samples per work factor)\n",
        "benchmark:".bold(),
        report.algorithm.identifier().cyan(),
        report.samples
    ));

    for entry in report.results.entries() {
        output.push_str(&format!("{}, {:.6} s\n", entry.work_factor, entry.mean_seconds));
    }

    output
}

/// Format a work-factor suggestion for terminal output.
pub fn format_suggestion(
    algorithm: Algorithm,
    target: Duration,
    work_factor: WorkFactor,
) -> String {
    format!(
        "{} {} {} for a {} ms target",
        "suggestion:".bold(),
        algorithm.identifier().cyan(),
        work_factor.to_string().green().bold(),
        target.as_millis()
    )
}
