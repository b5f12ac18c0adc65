//! Record browser
//!
//! Holds the loaded record list and the view state layered on top of it:
//! the active filter and sort, the single expanded record, and per-file
//! download progress. Every view operation re-derives the visible list from
//! the full set, so no operation can lose records.

pub mod downloads;
pub mod filter;

pub use downloads::{DownloadState, DownloadTracker};
pub use filter::{RecordQuery, SortDirection, SortKey};

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::adapters::store::RecordStore;
use crate::config::ExportScope;
use crate::core::export::{build_workbook, export_filename, ExportFile, ExportRow};
use crate::core::notify::{Notifier, Severity};
use crate::domain::{EmailRecord, MailbookError, RecordId, Result};

pub struct RecordBrowser {
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
    export_scope: ExportScope,
    all_records: Vec<EmailRecord>,
    query: RecordQuery,
    expanded: Option<RecordId>,
    downloads: DownloadTracker,
}

impl RecordBrowser {
    pub fn new(
        store: Arc<dyn RecordStore>,
        notifier: Arc<dyn Notifier>,
        export_scope: ExportScope,
    ) -> Self {
        Self {
            store,
            notifier,
            export_scope,
            all_records: Vec::new(),
            query: RecordQuery::default(),
            expanded: None,
            downloads: DownloadTracker::new(),
        }
    }

    /// Replace the record set from the store
    ///
    /// On failure the previously loaded records are kept so the view does
    /// not go blank on a transient outage.
    pub async fn load(&mut self) -> Result<()> {
        match self.store.list_records().await {
            Ok(records) => {
                info!(count = records.len(), "Loaded email records");
                self.all_records = records;
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .notify(Severity::Error, &failure_message("load records", &e));
                Err(e)
            }
        }
    }

    /// Records passing the current filter, in the current sort order
    pub fn visible_records(&self) -> Vec<&EmailRecord> {
        filter::apply(&self.all_records, &self.query)
    }

    pub fn record_count(&self) -> usize {
        self.all_records.len()
    }

    pub fn query(&self) -> &RecordQuery {
        &self.query
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
    }

    pub fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        self.query.date_filter = date;
    }

    /// Set the sort absolutely, regardless of the current key and direction
    ///
    /// For callers that state the full ordering up front, unlike
    /// [`toggle_sort`](Self::toggle_sort) which reacts to repeated selection.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.query.sort_key = key;
        self.query.sort_direction = direction;
    }

    /// Sort by `key`, flipping direction when the key is already active
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.query.toggle_sort(key);
        debug!(
            key = ?self.query.sort_key,
            direction = ?self.query.sort_direction,
            "Sort changed"
        );
    }

    /// Expand a record, collapsing it when already expanded
    ///
    /// At most one record is expanded at a time; expanding a second record
    /// collapses the first.
    pub fn toggle_expansion(&mut self, id: &RecordId) {
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.clone());
        }
    }

    pub fn expanded(&self) -> Option<&RecordId> {
        self.expanded.as_ref()
    }

    pub fn download_state(&self, filename: &str) -> DownloadState {
        self.downloads.state(filename)
    }

    /// Fetch an attachment's bytes from the store
    ///
    /// Downloads for different filenames may overlap; a second request for
    /// a filename that is still in flight is rejected.
    pub async fn download_attachment(&self, filename: &str) -> Result<Vec<u8>> {
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(MailbookError::Validation(
                "attachment filename is empty".to_string(),
            ));
        }
        if !self.downloads.begin(filename) {
            warn!(filename, "Download already in progress");
            self.notifier.notify(
                Severity::Warning,
                &format!("Download of {filename} is already in progress"),
            );
            return Err(MailbookError::Validation(format!(
                "download of {filename} is already in progress"
            )));
        }

        match self.store.download_attachment(filename).await {
            Ok(bytes) => {
                self.downloads.finish(filename, true);
                self.notifier
                    .notify(Severity::Success, &format!("Downloaded {filename}"));
                Ok(bytes)
            }
            Err(e) => {
                self.downloads.finish(filename, false);
                self.notifier.notify(
                    Severity::Error,
                    &failure_message(&format!("download {filename}"), &e),
                );
                Err(e)
            }
        }
    }

    /// Serialize records into an `.xlsx` workbook
    ///
    /// The configured scope decides whether the full set or only the
    /// currently visible records participate. An empty selection fails
    /// before any serialization happens.
    pub fn export(&self) -> Result<ExportFile> {
        let selected: Vec<&EmailRecord> = match self.export_scope {
            ExportScope::Full => self.all_records.iter().collect(),
            ExportScope::Filtered => self.visible_records(),
        };
        if selected.is_empty() {
            self.notifier
                .notify(Severity::Warning, "No records to export");
            return Err(MailbookError::ExportFailed(
                "no records to export".to_string(),
            ));
        }

        let rows: Vec<ExportRow> = selected
            .iter()
            .map(|record| {
                let url = record
                    .attachments
                    .first()
                    .map(|name| self.store.public_url(name));
                ExportRow::from_record(record, url)
            })
            .collect();

        let bytes = build_workbook(&rows)?;
        let filename = export_filename(Utc::now().date_naive());
        info!(count = rows.len(), filename, "Export built");
        self.notifier.notify(
            Severity::Success,
            &format!("Exported {} records to {filename}", rows.len()),
        );
        Ok(ExportFile { filename, bytes })
    }
}

/// Human-readable failure line, using the store error taxonomy when the
/// failure came from the store.
fn failure_message(action: &str, error: &MailbookError) -> String {
    match error {
        MailbookError::Store(e) => format!("Failed to {action} ({}): {e}", e.category()),
        other => format!("Failed to {action}: {other}"),
    }
}
