//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Mailbook using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Mailbook - institutional email record browser
#[derive(Parser, Debug)]
#[command(name = "mailbook")]
#[command(version, about, long_about = None)]
#[command(author = "Mailbook Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "mailbook.toml", env = "MAILBOOK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MAILBOOK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List email records with optional filtering and sorting
    List(commands::list::ListArgs),

    /// Export email records to an xlsx workbook
    Export(commands::export::ExportArgs),

    /// Download PDF attachments from the store
    Download(commands::download::DownloadArgs),

    /// Compose a new email record and print its Gmail compose URL
    Compose(commands::compose::ComposeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::parse_from(["mailbook", "list"]);
        assert_eq!(cli.config, "mailbook.toml");
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["mailbook", "--config", "custom.toml", "list"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["mailbook", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_export_filtered() {
        let cli = Cli::parse_from(["mailbook", "export", "--filtered", "--search", "exam"]);
        match cli.command {
            Commands::Export(args) => {
                assert!(args.filtered);
                assert_eq!(args.search, Some("exam".to_string()));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_cli_parse_download_multiple_files() {
        let cli = Cli::parse_from(["mailbook", "download", "a.pdf", "b.pdf"]);
        match cli.command {
            Commands::Download(args) => {
                assert_eq!(args.filenames, vec!["a.pdf", "b.pdf"]);
            }
            _ => panic!("expected download"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["mailbook", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["mailbook", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
