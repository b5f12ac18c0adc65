//! The email record entity
//!
//! Records are created once by the composer and read-only afterwards. The
//! datastore stores recipients and attachment keys as comma-joined strings;
//! those are normalized into proper lists at the adapter boundary so business
//! logic never re-parses them.

use crate::domain::ids::RecordId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A persisted email record
///
/// `id` and `created_at` are assigned by the datastore on insertion and are
/// immutable. The optional translated fields are `None` when the composing
/// user never requested a translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Datastore-assigned identifier
    pub id: RecordId,

    /// Free-text sender address
    pub from: String,

    /// One or more recipient addresses, trimmed, in entry order
    pub recipients: Vec<String>,

    /// Subject line
    pub subject: String,

    /// Body text
    pub content: String,

    /// Hindi translation of the subject, if requested
    pub subject_hindi: Option<String>,

    /// Hindi translation of the content, if requested
    pub content_hindi: Option<String>,

    /// Marathi translation of the subject, if requested
    pub subject_marathi: Option<String>,

    /// Marathi translation of the content, if requested
    pub content_marathi: Option<String>,

    /// Object storage keys of attached PDFs, in upload order
    pub attachments: Vec<String>,

    /// Calendar date chosen by the composing user
    pub sent_date: NaiveDate,

    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

impl EmailRecord {
    /// Whether the record carries at least one attachment
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Recipients joined for display and wire payloads
    pub fn recipients_joined(&self) -> String {
        self.recipients.join(", ")
    }
}

/// Payload for creating a new record
///
/// Built by the composer after draft validation; `id` and `created_at` are
/// filled in by the datastore.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmailRecord {
    pub from: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub content: String,
    pub subject_hindi: Option<String>,
    pub content_hindi: Option<String>,
    pub subject_marathi: Option<String>,
    pub content_marathi: Option<String>,
    pub attachments: Vec<String>,
    pub sent_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> EmailRecord {
        EmailRecord {
            id: RecordId::new("rec-1").unwrap(),
            from: "dean@college.edu".to_string(),
            recipients: vec![
                "staff@college.edu".to_string(),
                "hod@college.edu".to_string(),
            ],
            subject: "Semester schedule".to_string(),
            content: "The schedule is attached.".to_string(),
            subject_hindi: None,
            content_hindi: None,
            subject_marathi: None,
            content_marathi: None,
            attachments: vec!["schedule.pdf".to_string()],
            sent_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_has_attachments() {
        let mut record = sample_record();
        assert!(record.has_attachments());
        record.attachments.clear();
        assert!(!record.has_attachments());
    }

    #[test]
    fn test_recipients_joined() {
        let record = sample_record();
        assert_eq!(
            record.recipients_joined(),
            "staff@college.edu, hod@college.edu"
        );
    }
}
