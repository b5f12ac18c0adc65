//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Mailbook configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Store URL: {}", config.store.base_url);
        println!("  Records Table: {}", config.store.table);
        println!("  Attachment Bucket: {}", config.store.bucket);
        println!("  Request Timeout: {}s", config.store.timeout_seconds);
        println!("  Max Attachment Size: {} MB", config.store.max_attachment_mb);
        println!("  Export Scope: {:?}", config.export.scope);
        println!("  Export Output: {}", config.export.output_dir);
        println!(
            "  Translation: {}",
            if config.translation.enabled {
                "enabled"
            } else {
                "disabled (fallback phrases only)"
            }
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );

        Ok(0)
    }
}
