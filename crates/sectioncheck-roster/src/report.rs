//! Text report rendering.

use serde_json::Value;

use crate::error::InvalidEntry;
use crate::record::{MAX_SECTION_ID, MIN_SECTION_ID};
use crate::validation::SectionStats;

/// Maximum number of invalid entries itemized in a report.
pub const MAX_REPORT_ENTRIES: usize = 50;

/// Renders the summary report for a validated roster.
///
/// The report is deterministic plain text: a fixed two-line header, the
/// aggregate statistics, the configured range, and then either an all-clear
/// line or the itemized invalid entries capped at [`MAX_REPORT_ENTRIES`]
/// with a truncation notice beyond that. Lines are joined with a single
/// newline; no trailing newline is appended.
pub fn render_report(stats: &SectionStats) -> String {
    let mut lines = vec![
        "Section ID Analysis".to_string(),
        "====================".to_string(),
        format!("Total entries checked: {}", stats.count),
        format!("Minimum sectionId: {}", stats.min),
        format!("Maximum sectionId: {}", stats.max),
        format!("Expected range: {} - {}", MIN_SECTION_ID, MAX_SECTION_ID),
        String::new(),
    ];

    if stats.invalid.is_empty() {
        lines.push("All section IDs fall within the expected range.".to_string());
    } else {
        lines.push(format!(
            "Out-of-range or invalid section IDs ({}):",
            stats.invalid.len()
        ));
        for entry in stats.invalid.iter().take(MAX_REPORT_ENTRIES) {
            lines.push(render_entry(entry));
        }
        if stats.invalid.len() > MAX_REPORT_ENTRIES {
            lines.push("  ... (truncated)".to_string());
        }
    }

    lines.join("\n")
}

fn render_entry(entry: &InvalidEntry) -> String {
    format!(
        "  - sectionId={} courseCode={} sectionName={} issue={}",
        display_value(entry.section_id.as_ref()),
        display_str(entry.course_code.as_deref()),
        display_str(entry.section_name.as_deref()),
        entry.issue_label(),
    )
}

/// Renders a raw key value in its JSON form; absent values render as `null`.
fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

fn display_str(value: Option<&str>) -> &str {
    value.unwrap_or("null")
}
