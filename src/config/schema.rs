//! Configuration schema types
//!
//! This module defines the configuration structure for Mailbook.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Which records an export covers
///
/// Older deployments disagreed on whether the spreadsheet should contain the
/// filtered view or everything loaded, so the choice is an explicit policy
/// rather than a hidden assumption. Full is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    /// Export every loaded record
    #[default]
    Full,
    /// Export only the records matching the active search/date filters
    Filtered,
}

/// Main Mailbook configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailbookConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Hosted datastore and object storage configuration
    pub store: StoreConfig,

    /// Spreadsheet export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Translation accessor settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MailbookConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.store.validate()?;
        self.export.validate()?;
        self.translation.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Hosted datastore configuration
///
/// Mailbook talks to a Supabase-style backend: a REST endpoint for the
/// records table and an object storage endpoint for PDF attachments, both
/// under the same base URL and API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the hosted backend (no trailing slash)
    pub base_url: String,

    /// API key sent as both `apikey` and bearer token
    pub api_key: SecretString,

    /// Records table name
    #[serde(default = "default_table")]
    pub table: String,

    /// Object storage bucket holding PDF attachments
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Maximum attachment size accepted for upload, in megabytes
    #[serde(default = "default_max_attachment_mb")]
    pub max_attachment_mb: u64,
}

impl StoreConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.trim().is_empty() {
            return Err("store.base_url cannot be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "store.base_url must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }
        if self.base_url.ends_with('/') {
            return Err("store.base_url must not end with a trailing slash".to_string());
        }
        if self.api_key.expose_secret().is_empty() {
            return Err("store.api_key cannot be empty".to_string());
        }
        if self.table.trim().is_empty() {
            return Err("store.table cannot be empty".to_string());
        }
        if self.bucket.trim().is_empty() {
            return Err("store.bucket cannot be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("store.timeout_seconds must be greater than 0".to_string());
        }
        if self.max_attachment_mb == 0 {
            return Err("store.max_attachment_mb must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Spreadsheet export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Which records an export covers (full or filtered)
    #[serde(default)]
    pub scope: ExportScope,

    /// Directory the exported workbook is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scope: ExportScope::Full,
            output_dir: default_output_dir(),
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Translation accessor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Whether machine translation is attempted at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Base URL of the translation API
    #[serde(default = "default_translation_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_translation_timeout")]
    pub timeout_seconds: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_translation_url(),
            timeout_seconds: default_translation_timeout(),
        }
    }
}

impl TranslationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.base_url.trim().is_empty() {
            return Err("translation.base_url cannot be empty when enabled".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("translation.timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation policy (daily, hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }
        Ok(())
    }
}

fn default_app_name() -> String {
    "mailbook".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_table() -> String {
    "email_records".to_string()
}

fn default_bucket() -> String {
    "pdfs".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_attachment_mb() -> u64 {
    40
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}

fn default_translation_url() -> String {
    "https://api.mymemory.translated.net".to_string()
}

fn default_translation_timeout() -> u64 {
    20
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn sample_config() -> MailbookConfig {
        MailbookConfig {
            application: ApplicationConfig::default(),
            store: StoreConfig {
                base_url: "https://project.supabase.co".to_string(),
                api_key: secret_string("key-123".to_string()),
                table: default_table(),
                bucket: default_bucket(),
                timeout_seconds: 30,
                max_attachment_mb: 40,
            },
            export: ExportConfig::default(),
            translation: TranslationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = sample_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let mut config = sample_config();
        config.store.base_url = "https://project.supabase.co/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let mut config = sample_config();
        config.store.api_key = secret_string(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_export_scope_default_is_full() {
        assert_eq!(ExportScope::default(), ExportScope::Full);
    }

    #[test]
    fn test_export_scope_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            scope: ExportScope,
        }

        let w: Wrapper = toml::from_str("scope = \"filtered\"").unwrap();
        assert_eq!(w.scope, ExportScope::Filtered);
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let mut config = sample_config();
        config.export.output_dir = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = sample_config();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }
}
