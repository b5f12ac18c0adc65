//! Configuration management for Mailbook.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Mailbook uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - `MAILBOOK_*` environment variable overrides
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mailbook::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mailbook.toml")?;
//!
//! println!("Datastore: {}", config.store.base_url);
//! println!("Table: {}", config.store.table);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "mailbook"
//! log_level = "info"
//!
//! [store]
//! base_url = "https://your-project.supabase.co"
//! api_key = "${MAILBOOK_STORE_API_KEY}"
//! table = "email_records"
//! bucket = "pdfs"
//!
//! [export]
//! scope = "full"
//! output_dir = "."
//!
//! [translation]
//! enabled = true
//! ```
//!
//! # Validation
//!
//! Configuration is validated on load:
//!
//! ```rust,no_run
//! use mailbook::config::load_config;
//!
//! # fn example() {
//! match load_config("mailbook.toml") {
//!     Ok(config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ExportConfig, ExportScope, LoggingConfig, MailbookConfig, StoreConfig,
    TranslationConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
