//! Workbook layout for the email record export

use chrono::{DateTime, NaiveDate, Utc};
use rust_xlsxwriter::{Format, Url, Workbook};

use crate::domain::{EmailRecord, MailbookError, Result};

const SHEET_NAME: &str = "Email Records";

const HEADERS: [&str; 12] = [
    "From",
    "To",
    "Date",
    "Subject",
    "Content",
    "Subject (Hindi)",
    "Content (Hindi)",
    "Subject (Marathi)",
    "Content (Marathi)",
    "PDF Attachment",
    "Download Link",
    "Created At",
];

const COLUMN_WIDTHS: [f64; 12] = [
    25.0, 25.0, 15.0, 40.0, 50.0, 40.0, 50.0, 40.0, 50.0, 20.0, 20.0, 20.0,
];

/// One spreadsheet row, resolved from a record plus its attachment URL
#[derive(Debug, Clone)]
pub struct ExportRow {
    pub from: String,
    pub to: String,
    pub sent_date: String,
    pub subject: String,
    pub content: String,
    pub subject_hindi: String,
    pub content_hindi: String,
    pub subject_marathi: String,
    pub content_marathi: String,
    pub attachment_status: String,
    pub download_url: Option<String>,
    pub created_at: String,
}

impl ExportRow {
    /// Build a row from a record and the resolved public URL of its first
    /// attachment, if any.
    pub fn from_record(record: &EmailRecord, download_url: Option<String>) -> Self {
        let attachment_status = if record.has_attachments() {
            "Available"
        } else {
            "No Attachment"
        };
        Self {
            from: record.from.clone(),
            to: record.recipients_joined(),
            sent_date: format_date(record.sent_date),
            subject: record.subject.clone(),
            content: record.content.clone(),
            subject_hindi: record.subject_hindi.clone().unwrap_or_default(),
            content_hindi: record.content_hindi.clone().unwrap_or_default(),
            subject_marathi: record.subject_marathi.clone().unwrap_or_default(),
            content_marathi: record.content_marathi.clone().unwrap_or_default(),
            attachment_status: attachment_status.to_string(),
            download_url,
            created_at: format_timestamp(record.created_at),
        }
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Filename for an export produced on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("email-records-{}.xlsx", date.format("%Y-%m-%d"))
}

/// Serialize the rows into a single-sheet workbook
pub fn build_workbook(rows: &[ExportRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| MailbookError::ExportFailed(e.to_string()))?;

    let header_format = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| MailbookError::ExportFailed(e.to_string()))?;
    }
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(|e| MailbookError::ExportFailed(e.to_string()))?;
    }

    for (index, row) in rows.iter().enumerate() {
        let r = (index + 1) as u32;
        let cells = [
            &row.from,
            &row.to,
            &row.sent_date,
            &row.subject,
            &row.content,
            &row.subject_hindi,
            &row.content_hindi,
            &row.subject_marathi,
            &row.content_marathi,
            &row.attachment_status,
        ];
        for (col, value) in cells.iter().enumerate() {
            worksheet
                .write(r, col as u16, value.as_str())
                .map_err(|e| MailbookError::ExportFailed(e.to_string()))?;
        }
        match &row.download_url {
            Some(url) => {
                worksheet
                    .write_url(r, 10, Url::new(url).set_text("Download PDF"))
                    .map_err(|e| MailbookError::ExportFailed(e.to_string()))?;
            }
            None => {
                worksheet
                    .write(r, 10, "No Attachment")
                    .map_err(|e| MailbookError::ExportFailed(e.to_string()))?;
            }
        }
        worksheet
            .write(r, 11, row.created_at.as_str())
            .map_err(|e| MailbookError::ExportFailed(e.to_string()))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| MailbookError::ExportFailed(e.to_string()))
}
