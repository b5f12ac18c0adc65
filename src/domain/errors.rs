//! Domain error types
//!
//! This module defines the error hierarchy for Mailbook. All errors are
//! domain-specific and don't expose third-party types; transport errors from
//! the HTTP client are converted at the adapter edge.

use thiserror::Error;

/// Main Mailbook error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum MailbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Datastore / object storage errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Spreadsheet export errors
    #[error("Export failed: {0}")]
    ExportFailed(String),

    /// Validation errors (draft validation before save)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Translation accessor errors
    #[error("Translation error: {0}")]
    Translation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Datastore and object storage errors
///
/// Errors that occur when talking to the hosted backend. These map onto the
/// two user-visible failure categories: the service being unreachable, and a
/// specific stored object missing.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to reach the datastore or object storage service
    #[error("Datastore unavailable: {0}")]
    Unavailable(String),

    /// Object storage has no object for the given key
    #[error("Attachment not found: {0}")]
    AttachmentNotFound(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx other than not-found)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Response body could not be interpreted
    #[error("Invalid response from datastore: {0}")]
    InvalidResponse(String),

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl StoreError {
    /// Short category label used for user-visible notifications
    pub fn category(&self) -> &'static str {
        match self {
            StoreError::AttachmentNotFound(_) => "AttachmentNotFound",
            _ => "StoreUnavailable",
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for MailbookError {
    fn from(err: std::io::Error) -> Self {
        MailbookError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MailbookError {
    fn from(err: serde_json::Error) -> Self {
        MailbookError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MailbookError {
    fn from(err: toml::de::Error) -> Self {
        MailbookError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailbook_error_display() {
        let err = MailbookError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::Unavailable("connection refused".to_string());
        let err: MailbookError = store_err.into();
        assert!(matches!(err, MailbookError::Store(_)));
    }

    #[test]
    fn test_store_error_categories() {
        assert_eq!(
            StoreError::AttachmentNotFound("a.pdf".to_string()).category(),
            "AttachmentNotFound"
        );
        assert_eq!(
            StoreError::Unavailable("down".to_string()).category(),
            "StoreUnavailable"
        );
        assert_eq!(
            StoreError::ServerError {
                status: 503,
                message: "unavailable".to_string()
            }
            .category(),
            "StoreUnavailable"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: MailbookError = io_err.into();
        assert!(matches!(err, MailbookError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MailbookError = json_err.into();
        assert!(matches!(err, MailbookError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: MailbookError = toml_err.into();
        assert!(matches!(err, MailbookError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_mailbook_error_implements_std_error() {
        let err = MailbookError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_store_error_implements_std_error() {
        let err = StoreError::Timeout("30s".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
