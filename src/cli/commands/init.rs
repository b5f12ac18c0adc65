//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "mailbook.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Mailbook configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your store URL", self.output);
                println!("  2. Set MAILBOOK_STORE_API_KEY in your environment or a .env file");
                println!("  3. Validate configuration: mailbook validate-config");
                println!("  4. Browse records: mailbook list");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate sample configuration
    fn generate_config() -> String {
        r#"# Mailbook Configuration File
# Institutional email record browser

[application]
name = "mailbook"
log_level = "info"

[store]
# REST backend serving the records table and the PDF bucket
base_url = "https://your-project.supabase.co"
# Resolved from the environment at load time
api_key = "${MAILBOOK_STORE_API_KEY}"
table = "email_records"
bucket = "pdfs"
timeout_seconds = 30
max_attachment_mb = 40

[export]
# "full" exports every record, "filtered" only the visible ones
scope = "full"
output_dir = "."

[translation]
enabled = true
base_url = "https://api.mymemory.translated.net"
timeout_seconds = 20

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }
}
