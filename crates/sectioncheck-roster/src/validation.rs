//! Roster validation logic.

use serde::{Deserialize, Serialize};

use crate::error::{InvalidEntry, RosterError};
use crate::record::{SectionRecord, MAX_SECTION_ID, MIN_SECTION_ID};

/// Aggregate statistics over the integer-typed section keys of a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionStats {
    /// Number of records whose key passed the type check, in range or not.
    pub count: usize,

    /// Smallest integer key seen.
    pub min: i64,

    /// Largest integer key seen.
    pub max: i64,

    /// Diagnostics for malformed and out-of-range keys, in input order.
    pub invalid: Vec<InvalidEntry>,
}

impl SectionStats {
    /// Returns true if every key passed both the type and range checks.
    pub fn all_in_range(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Validates every record's sectionId and aggregates the results.
///
/// Records are processed in input order. A key that fails the type check is
/// recorded as invalid and excluded from the aggregate; an integer key
/// outside `MIN_SECTION_ID..=MAX_SECTION_ID` is recorded as invalid but
/// still contributes to `count`, `min`, and `max`. Each record is flagged
/// for at most one reason, since a non-integer key cannot be range-checked.
///
/// # Errors
///
/// Returns [`RosterError::EmptyDataset`] if no record carries an
/// integer-typed key, including the zero-record case.
///
/// # Example
///
/// ```
/// use sectioncheck_roster::{analyze_section_ids, SectionRecord};
///
/// let records = vec![
///     SectionRecord::with_id(150_000, "CS101", "A"),
///     SectionRecord::with_id(250_000, "CS102", "B"),
/// ];
///
/// let stats = analyze_section_ids(&records).unwrap();
/// assert_eq!(stats.count, 2);
/// assert!(stats.all_in_range());
/// ```
pub fn analyze_section_ids(records: &[SectionRecord]) -> Result<SectionStats, RosterError> {
    let mut count = 0usize;
    let mut bounds: Option<(i64, i64)> = None;
    let mut invalid: Vec<InvalidEntry> = Vec::new();

    for record in records {
        match record.integer_key() {
            Some(id) => {
                count += 1;
                bounds = Some(match bounds {
                    Some((lo, hi)) => (lo.min(id), hi.max(id)),
                    None => (id, id),
                });
                if !(MIN_SECTION_ID..=MAX_SECTION_ID).contains(&id) {
                    invalid.push(InvalidEntry::out_of_range(id, record));
                }
            }
            None => invalid.push(InvalidEntry::malformed(record)),
        }
    }

    let Some((min, max)) = bounds else {
        return Err(RosterError::EmptyDataset);
    };

    Ok(SectionStats {
        count,
        min,
        max,
        invalid,
    })
}
