//! Check command implementation
//!
//! Loads a roster dataset, validates every record's sectionId, and prints
//! the summary report.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use sectioncheck_roster::{analyze_section_ids, render_report, SectionStats};

use crate::input::load_roster;

/// Run the check command
///
/// # Arguments
/// * `dataset` - Path to the roster dataset (JSON array of section records)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if a report was rendered (invalid entries included), 1 on
/// a fatal error (unreadable dataset or no integer-typed keys at all)
pub fn run(dataset: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(dataset)
    } else {
        run_human(dataset)
    }
}

/// Run check with the plain-text report on stdout
fn run_human(dataset: &str) -> Result<ExitCode> {
    let records = load_roster(Path::new(dataset))
        .with_context(|| format!("Failed to load roster dataset: {}", dataset))?;

    let stats = analyze_section_ids(&records)
        .with_context(|| format!("Roster validation failed: {}", dataset))?;

    println!("{}", render_report(&stats));
    Ok(ExitCode::SUCCESS)
}

/// Run check with machine-readable JSON output
fn run_json(dataset: &str) -> Result<ExitCode> {
    let outcome =
        load_roster(Path::new(dataset)).and_then(|records| analyze_section_ids(&records));

    let output = match outcome {
        Ok(stats) => CheckOutput {
            success: true,
            dataset: dataset.to_string(),
            stats: Some(stats),
            error: None,
        },
        Err(e) => CheckOutput {
            success: false,
            dataset: dataset.to_string(),
            stats: None,
            error: Some(e.to_string()),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .expect("CheckOutput serialization should not fail");
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Structured output for the `--json` flag.
#[derive(Debug, Serialize)]
struct CheckOutput {
    success: bool,
    dataset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SectionStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}
