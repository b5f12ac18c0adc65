//! Compose command implementation
//!
//! This module implements the `compose` command: validate a draft,
//! translate it, persist the record, and print a prefilled Gmail compose
//! URL for the user to send from their own account.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use clap::Args;

use crate::adapters::store::create_store;
use crate::adapters::translate::{MyMemoryTranslator, Translator};
use crate::config::load_config;
use crate::core::compose::{gmail, Composer, EmailDraft};
use crate::core::notify::ConsoleNotifier;
use crate::domain::MailbookError;

/// Arguments for the compose command
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Sender address
    #[arg(long)]
    pub from: String,

    /// Comma-separated recipient addresses
    #[arg(long)]
    pub to: String,

    /// Subject line
    #[arg(long)]
    pub subject: String,

    /// Body text (or use --content-file)
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the body text from a file
    #[arg(long)]
    pub content_file: Option<String>,

    /// Sent date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// PDF file to attach
    #[arg(long)]
    pub attachment: Option<String>,

    /// Build the compose URL without saving a record
    #[arg(long)]
    pub no_save: bool,
}

impl ComposeArgs {
    /// Execute the compose command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting compose command");

        let config = load_config(config_path)?;

        let content = match (&self.content, &self.content_file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => {
                println!("❌ Provide --content or --content-file");
                return Ok(2);
            }
        };

        let sent_date = match &self.date {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    println!("❌ Invalid date: {raw} (expected YYYY-MM-DD)");
                    return Ok(2);
                }
            },
            None => Utc::now().date_naive(),
        };

        let attachment = match &self.attachment {
            Some(path) => {
                let bytes = std::fs::read(path)?;
                let filename = std::path::Path::new(path)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.clone());
                Some((filename, bytes))
            }
            None => None,
        };

        let draft = EmailDraft {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: self.subject.clone(),
            content,
            sent_date,
            attachment,
        };

        let store = create_store(&config.store)?;
        let notifier = Arc::new(ConsoleNotifier);
        let translator: Option<Arc<dyn Translator>> = if config.translation.enabled {
            Some(Arc::new(MyMemoryTranslator::new(&config.translation)?))
        } else {
            None
        };
        let composer = Composer::new(store, translator, notifier);

        if let Err(e) = draft.validate() {
            println!("❌ {e}");
            return Ok(1);
        }

        println!("✉️  Composing email record");
        let translations = composer.translate_draft(&draft).await;
        let url = gmail::compose_url(&draft, &translations)?;

        if !self.no_save {
            match composer.save(&draft, translations.clone()).await {
                Ok(record) => println!("✅ Saved record {}", record.id),
                Err(MailbookError::Validation(message)) => {
                    println!("❌ {message}");
                    return Ok(1);
                }
                Err(e) => {
                    println!("❌ Failed to save record: {e}");
                    return Ok(1);
                }
            }
        }

        println!();
        println!("Open in Gmail:");
        println!("{url}");
        Ok(0)
    }
}
