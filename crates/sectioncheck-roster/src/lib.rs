//! Sectioncheck Roster Library
//!
//! This crate provides record types, validation, and report rendering for
//! course-section roster datasets. A roster is a JSON array of record
//! objects; each record's `sectionId` key is expected to be an integer
//! within a fixed six-digit range.
//!
//! # Overview
//!
//! Validation classifies every record's key as valid, out-of-range, or
//! malformed (missing or non-integer), aggregates count/min/max over the
//! integer-typed keys, and collects a diagnostic [`InvalidEntry`] for each
//! flagged record. The report renderer turns the aggregate into a
//! deterministic multi-line text summary.
//!
//! # Example
//!
//! ```
//! use sectioncheck_roster::{analyze_section_ids, render_report, SectionRecord};
//!
//! let records = vec![
//!     SectionRecord::with_id(150_000, "CS101", "A"),
//!     SectionRecord::with_id(250_000, "CS102", "B"),
//! ];
//!
//! let stats = analyze_section_ids(&records).unwrap();
//! assert_eq!(stats.count, 2);
//!
//! let report = render_report(&stats);
//! assert!(report.starts_with("Section ID Analysis"));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and diagnostic types for validation
//! - [`record`]: Section record type and range constants
//! - [`validation`]: Roster validation
//! - [`report`]: Text report rendering

pub mod error;
pub mod record;
pub mod report;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{InvalidEntry, RosterError, MALFORMED_KEY_ISSUE, OUT_OF_RANGE_LABEL};
pub use record::{SectionRecord, MAX_SECTION_ID, MIN_SECTION_ID};
pub use report::{render_report, MAX_REPORT_ENTRIES};
pub use validation::{analyze_section_ids, SectionStats};
