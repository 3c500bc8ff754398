//! Course-section record types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lowest sectionId accepted by validation.
pub const MIN_SECTION_ID: i64 = 100_000;

/// Highest sectionId accepted by validation (full six-digit range).
pub const MAX_SECTION_ID: i64 = 999_999;

/// One scheduled course section as it appears in a roster dataset.
///
/// Roster sources are loosely typed: every field may be absent, and the
/// `sectionId` key is carried as a raw JSON value so that validation, not
/// deserialization, classifies its type. Fields beyond these three are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    /// Identifying key for the section. Expected to be an integer in
    /// `MIN_SECTION_ID..=MAX_SECTION_ID`, but may be absent or carry any
    /// JSON type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<Value>,

    /// Course code (e.g. "CS101"). Diagnostics only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,

    /// Section name (e.g. "A"). Diagnostics only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,
}

impl SectionRecord {
    /// Creates a record with an integer key.
    pub fn with_id(
        section_id: i64,
        course_code: impl Into<String>,
        section_name: impl Into<String>,
    ) -> Self {
        Self {
            section_id: Some(Value::from(section_id)),
            course_code: Some(course_code.into()),
            section_name: Some(section_name.into()),
        }
    }

    /// Creates a record carrying a raw JSON value as its key.
    pub fn with_raw_id(
        section_id: Value,
        course_code: impl Into<String>,
        section_name: impl Into<String>,
    ) -> Self {
        Self {
            section_id: Some(section_id),
            course_code: Some(course_code.into()),
            section_name: Some(section_name.into()),
        }
    }

    /// Creates a record with no key field at all.
    pub fn without_id(course_code: impl Into<String>, section_name: impl Into<String>) -> Self {
        Self {
            section_id: None,
            course_code: Some(course_code.into()),
            section_name: Some(section_name.into()),
        }
    }

    /// Returns the key when it is an integer.
    ///
    /// Absent keys, strings, booleans, non-integral numbers, and numbers
    /// outside the `i64` range all yield `None`.
    pub fn integer_key(&self) -> Option<i64> {
        match self.section_id {
            Some(Value::Number(ref n)) => n.as_i64(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_json() {
        let record: SectionRecord = serde_json::from_str(
            r#"{"sectionId": 150000, "courseCode": "CS101", "sectionName": "A"}"#,
        )
        .unwrap();

        assert_eq!(record.integer_key(), Some(150000));
        assert_eq!(record.course_code.as_deref(), Some("CS101"));
        assert_eq!(record.section_name.as_deref(), Some("A"));
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let record: SectionRecord = serde_json::from_str(
            r#"{"sectionId": 150000, "courseCode": "CS101", "sectionName": "A",
                "instructor": "Prof. X", "capacity": 30}"#,
        )
        .unwrap();

        assert_eq!(record.integer_key(), Some(150000));
    }

    #[test]
    fn test_record_all_fields_optional() {
        let record: SectionRecord = serde_json::from_str("{}").unwrap();

        assert!(record.section_id.is_none());
        assert!(record.course_code.is_none());
        assert!(record.section_name.is_none());
        assert_eq!(record.integer_key(), None);
    }

    #[test]
    fn test_integer_key_rejects_non_integers() {
        let string_key = SectionRecord::with_raw_id(json!("150000"), "CS101", "A");
        assert_eq!(string_key.integer_key(), None);

        let bool_key = SectionRecord::with_raw_id(json!(true), "CS101", "A");
        assert_eq!(bool_key.integer_key(), None);

        let float_key = SectionRecord::with_raw_id(json!(150000.5), "CS101", "A");
        assert_eq!(float_key.integer_key(), None);

        let null_key = SectionRecord::with_raw_id(json!(null), "CS101", "A");
        assert_eq!(null_key.integer_key(), None);
    }

    #[test]
    fn test_integer_key_accepts_negative_integers() {
        let record = SectionRecord::with_id(-42, "CS101", "A");
        assert_eq!(record.integer_key(), Some(-42));
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = SectionRecord::with_id(250000, "MATH200", "B");

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("sectionId"));
        assert!(json.contains("courseCode"));

        let parsed: SectionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_serialize_skips_absent_fields() {
        let record = SectionRecord::without_id("CS101", "A");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("sectionId"));
    }

    #[test]
    fn test_range_constants() {
        assert!(MIN_SECTION_ID < MAX_SECTION_ID);
        assert_eq!(MIN_SECTION_ID, 100_000);
        assert_eq!(MAX_SECTION_ID, 999_999);
    }
}
