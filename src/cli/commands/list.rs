//! List command implementation
//!
//! This module implements the `list` command for browsing email records
//! with the same filter and sort behavior the export uses.

use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Args;

use crate::adapters::store::create_store;
use crate::config::load_config;
use crate::core::browser::{RecordBrowser, SortDirection, SortKey};
use crate::core::notify::ConsoleNotifier;
use crate::domain::RecordId;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive search across sender, recipients, subject, and content
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only records sent on this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Sort key (date, created, from, to, subject)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub ascending: bool,

    /// Show the full content of the record with this id
    #[arg(long)]
    pub expand: Option<String>,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting list command");

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

        let sort_key = match &self.sort {
            Some(raw) => match SortKey::from_str(raw) {
                Ok(key) => Some(key),
                Err(e) => {
                    println!("❌ {e}");
                    return Ok(2);
                }
            },
            None => None,
        };

        let store = create_store(&config.store)?;
        let notifier = Arc::new(ConsoleNotifier);
        let mut browser = RecordBrowser::new(store, notifier, config.export.scope);

        if browser.load().await.is_err() {
            return Ok(1);
        }

        if let Some(term) = &self.search {
            browser.set_search_term(term.clone());
        }
        browser.set_date_filter(date_filter);

        let direction = if self.ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        browser.set_sort(sort_key.unwrap_or(SortKey::SentDate), direction);

        if let Some(raw_id) = &self.expand {
            match RecordId::new(raw_id) {
                Ok(id) => browser.toggle_expansion(&id),
                Err(e) => {
                    println!("❌ {e}");
                    return Ok(2);
                }
            }
        }

        let visible = browser.visible_records();
        println!(
            "📧 {} of {} records",
            visible.len(),
            browser.record_count()
        );
        println!();

        for record in &visible {
            let attachment_marker = if record.has_attachments() { " 📎" } else { "" };
            println!(
                "  [{}] {}  {} -> {}",
                record.id,
                record.sent_date.format("%Y-%m-%d"),
                record.from,
                record.recipients_joined()
            );
            println!("      {}{}", record.subject, attachment_marker);

            if browser.expanded() == Some(&record.id) {
                println!();
                println!("      {}", record.content);
                if let Some(hindi) = &record.content_hindi {
                    println!("      {hindi}");
                }
                if let Some(marathi) = &record.content_marathi {
                    println!("      {marathi}");
                }
                if record.has_attachments() {
                    println!("      Attachments: {}", record.attachments.join(", "));
                }
                println!();
            }
        }

        Ok(0)
    }
}
