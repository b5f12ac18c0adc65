//! Record store abstraction
//!
//! This module defines the trait the rest of the application uses to talk to
//! the hosted backend. The record browser and the composer only ever see this
//! interface, which keeps the wire format and HTTP details in one place.

use crate::domain::record::{EmailRecord, NewEmailRecord};
use crate::domain::Result;
use async_trait::async_trait;

/// Datastore and object storage operations
///
/// Records are created once and read many times; there is no update or
/// delete. Attachment bytes live in a separate object storage bucket keyed by
/// generated filenames.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// List all records, newest `created_at` first
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::Unavailable`](crate::domain::StoreError) when
    /// the service cannot be reached. Callers keep their previous in-memory
    /// list on failure.
    async fn list_records(&self) -> Result<Vec<EmailRecord>>;

    /// Persist a new record and return it with the server-assigned id and
    /// creation timestamp
    async fn create_record(&self, record: &NewEmailRecord) -> Result<EmailRecord>;

    /// Fetch raw attachment bytes by object key
    ///
    /// # Errors
    ///
    /// Fails with `AttachmentNotFound` when the bucket has no object for the
    /// key, or `Unavailable` on transport errors.
    async fn download_attachment(&self, filename: &str) -> Result<Vec<u8>>;

    /// Store attachment bytes under a generated object key
    ///
    /// The returned key is what gets recorded in `pdf_filename`. The original
    /// filename only contributes its extension.
    async fn upload_attachment(&self, original_filename: &str, bytes: Vec<u8>) -> Result<String>;

    /// Best-effort public URL for an object key
    ///
    /// Used only for building exportable hyperlinks; never fails, even when
    /// the object does not exist.
    fn public_url(&self, filename: &str) -> String;
}
