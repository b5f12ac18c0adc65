// Mailbook - Institutional Email Record Browser
// Copyright (c) 2025 Mailbook Contributors
// Licensed under the MIT License

//! # Mailbook - Institutional Email Record Browser
//!
//! Mailbook is a CLI tool for browsing, exporting, and composing the email
//! records an institution keeps in a hosted datastore. Records carry Hindi
//! and Marathi translations alongside the English text and may reference a
//! PDF attachment in the store's object bucket.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Browsing** records with combined search, date filter, and stable sort
//! - **Exporting** the record set to an `.xlsx` workbook with attachment links
//! - **Downloading** PDF attachments, with overlapping per-file downloads
//! - **Composing** new records with translation and a prefilled Gmail URL
//!
//! ## Architecture
//!
//! Mailbook follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (browser, export, compose, notifications)
//! - [`adapters`] - External integrations (record store, translation)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mailbook::adapters::store::create_store;
//! use mailbook::config::load_config;
//! use mailbook::core::browser::RecordBrowser;
//! use mailbook::core::notify::ConsoleNotifier;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("mailbook.toml")?;
//!     let store = create_store(&config.store)?;
//!     let notifier = Arc::new(ConsoleNotifier);
//!
//!     let mut browser = RecordBrowser::new(store, notifier, config.export.scope);
//!     browser.load().await?;
//!
//!     browser.set_search_term("exam");
//!     for record in browser.visible_records() {
//!         println!("{}: {}", record.sent_date, record.subject);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
