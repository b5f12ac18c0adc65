//! Export command implementation
//!
//! This module implements the `export` command for writing email records
//! to an xlsx workbook on disk.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Args;

use crate::adapters::store::create_store;
use crate::config::{load_config, ExportScope};
use crate::core::browser::RecordBrowser;
use crate::core::notify::ConsoleNotifier;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory to write the workbook into (defaults to configured output_dir)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Export only the records matching --search and --date
    #[arg(long)]
    pub filtered: bool,

    /// Case-insensitive search term applied before a filtered export
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only records sent on this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let config = load_config(config_path)?;

        let date_filter = match &self.date {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    println!("❌ Invalid date: {raw} (expected YYYY-MM-DD)");
                    return Ok(2);
                }
            },
            None => None,
        };

        let scope = if self.filtered {
            ExportScope::Filtered
        } else {
            config.export.scope
        };

        let store = create_store(&config.store)?;
        let notifier = Arc::new(ConsoleNotifier);
        let mut browser = RecordBrowser::new(store, notifier, scope);

        println!("📤 Exporting email records");

        if browser.load().await.is_err() {
            return Ok(1);
        }
        if let Some(term) = &self.search {
            browser.set_search_term(term.clone());
        }
        browser.set_date_filter(date_filter);

        let file = match browser.export() {
            Ok(file) => file,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                return Ok(1);
            }
        };

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());
        let path = PathBuf::from(output_dir).join(&file.filename);
        match std::fs::write(&path, &file.bytes) {
            Ok(_) => {
                println!("✅ Wrote {}", path.display());
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write {}: {e}", path.display());
                Ok(5)
            }
        }
    }
}
