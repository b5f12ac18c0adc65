//! Download command implementation
//!
//! This module implements the `download` command for fetching PDF
//! attachments from the store. Multiple filenames download concurrently.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use futures::future::join_all;

use crate::adapters::store::create_store;
use crate::config::load_config;
use crate::core::browser::RecordBrowser;
use crate::core::notify::ConsoleNotifier;

/// Arguments for the download command
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Attachment filenames as stored in the bucket
    #[arg(required = true)]
    pub filenames: Vec<String>,

    /// Directory to write the files into
    #[arg(short, long, default_value = ".")]
    pub output: String,
}

impl DownloadArgs {
    /// Execute the download command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(count = self.filenames.len(), "Starting download command");

        let config = load_config(config_path)?;
        let store = create_store(&config.store)?;
        let notifier = Arc::new(ConsoleNotifier);
        let browser = RecordBrowser::new(store, notifier, config.export.scope);

        println!("📥 Downloading {} attachment(s)", self.filenames.len());

        // Each future captures the browser by shared reference
        let browser = &browser;
        let downloads = join_all(self.filenames.iter().map(|filename| async move {
            (filename, browser.download_attachment(filename).await)
        }))
        .await;

        let mut failures = 0;
        for (filename, result) in downloads {
            match result {
                Ok(bytes) => {
                    let path = PathBuf::from(&self.output).join(filename.trim());
                    if let Err(e) = std::fs::write(&path, &bytes) {
                        println!("❌ Failed to write {}: {e}", path.display());
                        failures += 1;
                    }
                }
                Err(_) => {
                    failures += 1;
                }
            }
        }

        if failures > 0 {
            println!("⚠️  {failures} of {} downloads failed", self.filenames.len());
            Ok(1)
        } else {
            Ok(0)
        }
    }
}
