//! Input handling for roster datasets.
//!
//! Loads a roster file into the ordered record sequence the validator
//! consumes. A roster is a JSON array of record objects; I/O failures and
//! source data that cannot be parsed into records belong to this boundary,
//! not to validation.

use std::path::Path;

use sectioncheck_roster::{RosterError, SectionRecord};

/// Default roster file consulted when no dataset path is given.
pub const FALLBACK_DATASET: &str = "fallback.json";

/// Loads an ordered roster from a JSON file.
///
/// Record fields beyond `sectionId`, `courseCode`, and `sectionName` are
/// carried by the source freely and ignored here.
///
/// # Errors
///
/// Returns [`RosterError::Io`] if the file cannot be read and
/// [`RosterError::JsonParse`] if its content is not a JSON array of
/// record objects.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sectioncheck_cli::input::load_roster;
///
/// let records = load_roster(Path::new("fallback.json")).unwrap();
/// println!("Loaded {} records", records.len());
/// ```
pub fn load_roster(path: &Path) -> Result<Vec<SectionRecord>, RosterError> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<SectionRecord> = serde_json::from_str(&content)?;
    Ok(records)
}
