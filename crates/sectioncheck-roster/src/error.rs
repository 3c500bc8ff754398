//! Error and diagnostic types for roster validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::record::SectionRecord;

/// Issue text attached to entries whose key failed the type check.
pub const MALFORMED_KEY_ISSUE: &str = "Missing or non-integer sectionId";

/// Label rendered for entries flagged by the range check, which carry no
/// issue text of their own.
pub const OUT_OF_RANGE_LABEL: &str = "out of range";

/// A diagnostic for one record that failed validation.
///
/// `issue` is present for type failures and absent for range failures;
/// the absence itself marks an entry as out of range. Entries are created
/// during validation and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidEntry {
    /// The offending key value as it appeared in the record, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<Value>,

    /// Course code carried through from the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,

    /// Section name carried through from the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,

    /// Why the record was flagged; absent for out-of-range keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

impl InvalidEntry {
    /// Creates an entry for a record whose key is missing or non-integer.
    pub fn malformed(record: &SectionRecord) -> Self {
        Self {
            section_id: record.section_id.clone(),
            course_code: record.course_code.clone(),
            section_name: record.section_name.clone(),
            issue: Some(MALFORMED_KEY_ISSUE.to_string()),
        }
    }

    /// Creates an entry for an integer key outside the accepted range.
    pub fn out_of_range(section_id: i64, record: &SectionRecord) -> Self {
        Self {
            section_id: Some(Value::from(section_id)),
            course_code: record.course_code.clone(),
            section_name: record.section_name.clone(),
            issue: None,
        }
    }

    /// Returns true if this entry records a range failure rather than a
    /// type failure.
    pub fn is_out_of_range(&self) -> bool {
        self.issue.is_none()
    }

    /// Returns the issue text, or the out-of-range label when none is set.
    pub fn issue_label(&self) -> &str {
        self.issue.as_deref().unwrap_or(OUT_OF_RANGE_LABEL)
    }
}

/// Top-level error type for roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The dataset yielded no integer-typed sectionId at all, so the
    /// aggregate statistics are undefined.
    #[error("no valid sectionId values found in the dataset")]
    EmptyDataset,

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_entry_carries_record_fields() {
        let record = SectionRecord::with_raw_id(json!("bad"), "CS103", "C");
        let entry = InvalidEntry::malformed(&record);

        assert_eq!(entry.section_id, Some(json!("bad")));
        assert_eq!(entry.course_code.as_deref(), Some("CS103"));
        assert_eq!(entry.section_name.as_deref(), Some("C"));
        assert_eq!(entry.issue.as_deref(), Some(MALFORMED_KEY_ISSUE));
        assert!(!entry.is_out_of_range());
    }

    #[test]
    fn test_malformed_entry_with_absent_fields() {
        let record = SectionRecord::default();
        let entry = InvalidEntry::malformed(&record);

        assert!(entry.section_id.is_none());
        assert!(entry.course_code.is_none());
        assert!(entry.section_name.is_none());
        assert_eq!(entry.issue_label(), MALFORMED_KEY_ISSUE);
    }

    #[test]
    fn test_out_of_range_entry_has_no_issue() {
        let record = SectionRecord::with_id(50, "CS102", "B");
        let entry = InvalidEntry::out_of_range(50, &record);

        assert_eq!(entry.section_id, Some(json!(50)));
        assert!(entry.issue.is_none());
        assert!(entry.is_out_of_range());
        assert_eq!(entry.issue_label(), OUT_OF_RANGE_LABEL);
    }

    #[test]
    fn test_invalid_entry_serde() {
        let record = SectionRecord::with_id(50, "CS102", "B");
        let entry = InvalidEntry::out_of_range(50, &record);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("sectionId"));
        // Out-of-range entries serialize without an issue field.
        assert!(!json.contains("issue"));

        let parsed: InvalidEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_empty_dataset_error_display() {
        let err = RosterError::EmptyDataset;
        assert_eq!(
            err.to_string(),
            "no valid sectionId values found in the dataset"
        );
    }
}
