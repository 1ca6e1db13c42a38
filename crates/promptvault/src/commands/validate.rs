//! Validate command - check a prompt document against the COSTAR schema

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use promptvault_core::schema::Phase;
use promptvault_core::validate::{CheckStatus, ValidationReport, Validator};
use serde_json::json;
use std::path::{Path, PathBuf};

/// Validate a prompt file
///
/// # Returns
///
/// `Ok(true)` for a structurally valid document, `Ok(false)` otherwise.
/// Warnings never make a document invalid. A file that cannot be read is an
/// `Err`, distinct from an invalid document.
pub fn run(
    file: PathBuf,
    json: bool,
    min_test_cases: Option<usize>,
    root: &Path,
    verbose: bool,
) -> Result<bool> {
    let ctx = Context::new(root, verbose)?;
    let text = ctx.vault.read_document(&file)?;

    let mut schema = ctx.vault.config().schema();
    if let Some(min) = min_test_cases {
        schema = schema.with_min_test_cases(min);
    }
    let report = Validator::new(schema).validate(&text);

    if json {
        render_json(&file, &report)?;
    } else {
        render_human(&file, &report, ctx.verbose);
    }

    Ok(report.is_valid())
}

/// Render validation report as JSON
fn render_json(file: &Path, report: &ValidationReport) -> Result<()> {
    let output = json!({
        "schema_version": "1.0",
        "file": file.display().to_string(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "valid": report.is_valid(),
        "missing_sections": report.missing_sections(),
        "test_case_count": report.test_case_count(),
        "min_test_cases": report.min_test_cases(),
        "has_evaluation_block": report.has_evaluation_block(),
        "warnings": report.warnings(),
        "checks": report.checks(),
    });

    print_json(&output)
}

/// Render validation report in human-readable format
fn render_human(file: &Path, report: &ValidationReport, verbose: bool) {
    println!("{} Validating: {}\n", "→".cyan(), file.display());

    for check in report.checks() {
        println!(
            "{} {} [{}]",
            status_icon(check.status),
            check.name,
            status_text(check.status)
        );
        println!("  - {}", check.message);
    }

    if verbose && !report.is_valid() {
        render_missing_phases(report.missing_sections());
    }

    render_summary(report);
}

/// List missing phases with their COSTAR letters
fn render_missing_phases(missing: &[Phase]) {
    println!("\n{} Add these headings:", "→".cyan());
    for phase in missing {
        println!("  [{}] {}", phase.code(), phase.heading());
    }
}

fn render_summary(report: &ValidationReport) {
    println!();
    let warning_count = report.warnings().len();
    if !report.is_valid() {
        println!(
            "{} Invalid: {} missing section(s), {} warning(s)",
            "✗".red().bold(),
            report.missing_sections().len(),
            warning_count
        );
    } else if warning_count > 0 {
        println!(
            "{} Valid with {} warning(s)",
            "⚠".yellow().bold(),
            warning_count
        );
    } else {
        println!("{} All checks passed", "✓".green().bold());
    }
}

/// Get status icon for check status
fn status_icon(status: CheckStatus) -> String {
    match status {
        CheckStatus::Pass => "✓".green().to_string(),
        CheckStatus::Warning => "⚠".yellow().to_string(),
        CheckStatus::Error => "✗".red().to_string(),
    }
}

/// Get status text for check status
fn status_text(status: CheckStatus) -> String {
    match status {
        CheckStatus::Pass => "PASS".green().to_string(),
        CheckStatus::Warning => "WARNING".yellow().to_string(),
        CheckStatus::Error => "ERROR".red().to_string(),
    }
}
