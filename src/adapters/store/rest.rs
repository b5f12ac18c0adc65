//! REST implementation of the record store
//!
//! Talks to a Supabase-style hosted backend: a PostgREST endpoint for the
//! records table under `/rest/v1/` and an object storage API under
//! `/storage/v1/`. All third-party transport errors are converted to the
//! domain [`StoreError`] taxonomy here.

use super::models::{EmailRecordRow, NewEmailRecordRow};
use super::traits::RecordStore;
use crate::config::StoreConfig;
use crate::domain::record::{EmailRecord, NewEmailRecord};
use crate::domain::{MailbookError, Result, StoreError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::path::Path;
use std::time::Duration;
use uuid::Uuid;

/// REST record store
///
/// # Example
///
/// ```no_run
/// use mailbook::adapters::store::rest::RestStore;
/// use mailbook::adapters::store::traits::RecordStore;
/// use mailbook::config::{secret_string, StoreConfig};
///
/// # async fn example() -> mailbook::domain::Result<()> {
/// let config = StoreConfig {
///     base_url: "https://project.supabase.co".to_string(),
///     api_key: secret_string("service-key".to_string()),
///     table: "email_records".to_string(),
///     bucket: "pdfs".to_string(),
///     timeout_seconds: 30,
///     max_attachment_mb: 40,
/// };
/// let store = RestStore::new(&config)?;
/// let records = store.list_records().await?;
/// # Ok(())
/// # }
/// ```
pub struct RestStore {
    base_url: String,
    table: String,
    bucket: String,
    client: Client,
    api_key: String,
    max_attachment_bytes: u64,
}

impl RestStore {
    /// Create a new REST store from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                MailbookError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.clone(),
            table: config.table.clone(),
            bucket: config.bucket.clone(),
            client,
            api_key: config.api_key.expose_secret().as_ref().to_string(),
            max_attachment_bytes: config.max_attachment_mb * 1024 * 1024,
        })
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }

    fn transport_error(err: reqwest::Error) -> StoreError {
        if err.is_timeout() {
            StoreError::Timeout(err.to_string())
        } else {
            StoreError::Unavailable(err.to_string())
        }
    }

    async fn status_error(response: reqwest::Response) -> StoreError {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        if status.is_server_error() {
            StoreError::ServerError {
                status: status.as_u16(),
                message,
            }
        } else {
            StoreError::ClientError {
                status: status.as_u16(),
                message,
            }
        }
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn list_records(&self) -> Result<Vec<EmailRecord>> {
        let url = format!("{}?select=*&order=created_at.desc", self.table_url());

        let response = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await.into());
        }

        let rows: Vec<EmailRecordRow> = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        let mut records = rows
            .into_iter()
            .map(EmailRecordRow::into_domain)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // The service orders by created_at, but don't rely on it
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        tracing::debug!(count = records.len(), "Listed email records");
        Ok(records)
    }

    async fn create_record(&self, record: &NewEmailRecord) -> Result<EmailRecord> {
        let row = NewEmailRecordRow::from(record);

        let response = self
            .request(Method::POST, self.table_url())
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await.into());
        }

        // PostgREST returns the inserted rows as an array
        let mut rows: Vec<EmailRecordRow> = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        if rows.is_empty() {
            return Err(
                StoreError::InvalidResponse("insert returned no rows".to_string()).into(),
            );
        }

        let record = rows.remove(0).into_domain()?;
        tracing::info!(id = %record.id, "Created email record");
        Ok(record)
    }

    async fn download_attachment(&self, filename: &str) -> Result<Vec<u8>> {
        let response = self
            .request(Method::GET, self.object_url(filename))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::AttachmentNotFound(filename.to_string()).into());
        }
        if !response.status().is_success() {
            return Err(Self::status_error(response).await.into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        tracing::debug!(filename = %filename, size = bytes.len(), "Downloaded attachment");
        Ok(bytes.to_vec())
    }

    async fn upload_attachment(&self, original_filename: &str, bytes: Vec<u8>) -> Result<String> {
        if bytes.len() as u64 > self.max_attachment_bytes {
            return Err(MailbookError::Validation(format!(
                "Attachment exceeds {} MB limit",
                self.max_attachment_bytes / (1024 * 1024)
            )));
        }

        let extension = Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("pdf");
        let key = format!("{}.{}", Uuid::new_v4().simple(), extension);

        let response = self
            .request(Method::POST, self.object_url(&key))
            .header("Content-Type", "application/pdf")
            .body(bytes)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await.into());
        }

        tracing::info!(key = %key, "Uploaded attachment");
        Ok(key)
    }

    fn public_url(&self, filename: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, filename
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn test_config(base_url: &str) -> StoreConfig {
        StoreConfig {
            base_url: base_url.to_string(),
            api_key: secret_string("test-key".to_string()),
            table: "email_records".to_string(),
            bucket: "pdfs".to_string(),
            timeout_seconds: 5,
            max_attachment_mb: 1,
        }
    }

    #[test]
    fn test_public_url_shape() {
        let store = RestStore::new(&test_config("https://project.supabase.co")).unwrap();
        assert_eq!(
            store.public_url("abc.pdf"),
            "https://project.supabase.co/storage/v1/object/public/pdfs/abc.pdf"
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_attachment() {
        let store = RestStore::new(&test_config("https://project.supabase.co")).unwrap();
        let oversized = vec![0u8; 2 * 1024 * 1024];
        let result = store.upload_attachment("big.pdf", oversized).await;
        assert!(matches!(result, Err(MailbookError::Validation(_))));
    }
}
