//! Wire-format models for the records table
//!
//! The table stores recipients and attachment keys as comma-joined strings
//! and translated fields as empty strings when absent. The split/join and
//! empty-to-None normalization happens here, at the wire edge, and nowhere
//! else.

use crate::domain::ids::RecordId;
use crate::domain::record::{EmailRecord, NewEmailRecord};
use crate::domain::StoreError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A row as returned by the datastore REST endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct EmailRecordRow {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub from_user: String,
    pub to_user: String,
    pub subject: String,
    pub content: String,
    #[serde(default)]
    pub subject_hindi: Option<String>,
    #[serde(default)]
    pub content_hindi: Option<String>,
    #[serde(default)]
    pub subject_marathi: Option<String>,
    #[serde(default)]
    pub content_marathi: Option<String>,
    #[serde(default)]
    pub pdf_filename: Option<String>,
    pub sent_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl EmailRecordRow {
    /// Convert a wire row into the domain entity
    ///
    /// Tolerates malformed denormalized data: stray whitespace and empty
    /// segments in the comma-joined columns are dropped rather than rejected.
    pub fn into_domain(self) -> Result<EmailRecord, StoreError> {
        let id = RecordId::new(self.id)
            .map_err(|e| StoreError::InvalidResponse(format!("bad record id: {e}")))?;

        Ok(EmailRecord {
            id,
            from: self.from_user,
            recipients: split_list(&self.to_user),
            subject: self.subject,
            content: self.content,
            subject_hindi: empty_to_none(self.subject_hindi),
            content_hindi: empty_to_none(self.content_hindi),
            subject_marathi: empty_to_none(self.subject_marathi),
            content_marathi: empty_to_none(self.content_marathi),
            attachments: self.pdf_filename.as_deref().map(split_list).unwrap_or_default(),
            sent_date: self.sent_date,
            created_at: self.created_at,
        })
    }
}

/// Insert payload for the records table
///
/// `id` and `created_at` are assigned server-side and therefore absent here.
#[derive(Debug, Clone, Serialize)]
pub struct NewEmailRecordRow {
    pub from_user: String,
    pub to_user: String,
    pub subject: String,
    pub content: String,
    pub subject_hindi: String,
    pub content_hindi: String,
    pub subject_marathi: String,
    pub content_marathi: String,
    pub pdf_filename: Option<String>,
    pub sent_date: NaiveDate,
}

impl From<&NewEmailRecord> for NewEmailRecordRow {
    fn from(record: &NewEmailRecord) -> Self {
        Self {
            from_user: record.from.clone(),
            to_user: record.recipients.join(","),
            subject: record.subject.clone(),
            content: record.content.clone(),
            subject_hindi: record.subject_hindi.clone().unwrap_or_default(),
            content_hindi: record.content_hindi.clone().unwrap_or_default(),
            subject_marathi: record.subject_marathi.clone().unwrap_or_default(),
            content_marathi: record.content_marathi.clone().unwrap_or_default(),
            pdf_filename: if record.attachments.is_empty() {
                None
            } else {
                Some(record.attachments.join(","))
            },
            sent_date: record.sent_date,
        }
    }
}

/// Split a comma-joined column into trimmed, non-empty parts
pub fn split_list(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn empty_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// The datastore may issue numeric or string ids depending on how the table
/// was provisioned; both map to the opaque string id.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "unsupported id type: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        assert_eq!(
            split_list(" a@x.com , b@y.com ,,c@z.com"),
            vec!["a@x.com", "b@y.com", "c@z.com"]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }

    #[test]
    fn test_row_into_domain() {
        let json = r#"{
            "id": 17,
            "from_user": "dean@college.edu",
            "to_user": "a@college.edu, b@college.edu",
            "subject": "Notice",
            "content": "Please read.",
            "subject_hindi": "",
            "content_hindi": null,
            "pdf_filename": "x1.pdf,x2.pdf",
            "sent_date": "2024-03-01",
            "created_at": "2024-03-01T10:00:00Z"
        }"#;

        let row: EmailRecordRow = serde_json::from_str(json).unwrap();
        let record = row.into_domain().unwrap();

        assert_eq!(record.id.as_str(), "17");
        assert_eq!(record.recipients, vec!["a@college.edu", "b@college.edu"]);
        assert_eq!(record.subject_hindi, None);
        assert_eq!(record.content_hindi, None);
        assert_eq!(record.attachments, vec!["x1.pdf", "x2.pdf"]);
    }

    #[test]
    fn test_row_without_attachment() {
        let json = r#"{
            "id": "rec-1",
            "from_user": "dean@college.edu",
            "to_user": "a@college.edu",
            "subject": "Notice",
            "content": "Please read.",
            "sent_date": "2024-03-01",
            "created_at": "2024-03-01T10:00:00Z"
        }"#;

        let row: EmailRecordRow = serde_json::from_str(json).unwrap();
        let record = row.into_domain().unwrap();
        assert!(record.attachments.is_empty());
        assert!(!record.has_attachments());
    }

    #[test]
    fn test_new_row_joins_at_wire_edge() {
        let payload = NewEmailRecord {
            from: "dean@college.edu".to_string(),
            recipients: vec!["a@college.edu".to_string(), "b@college.edu".to_string()],
            subject: "Notice".to_string(),
            content: "Body".to_string(),
            subject_hindi: None,
            content_hindi: None,
            subject_marathi: None,
            content_marathi: None,
            attachments: vec![],
            sent_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };

        let row = NewEmailRecordRow::from(&payload);
        assert_eq!(row.to_user, "a@college.edu,b@college.edu");
        assert_eq!(row.subject_hindi, "");
        assert_eq!(row.pdf_filename, None);
    }
}
