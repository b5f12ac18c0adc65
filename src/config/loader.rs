//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{ExportScope, MailbookConfig};
use crate::config::secret_string;
use crate::domain::errors::MailbookError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MailbookConfig
/// 4. Applies environment variable overrides (MAILBOOK_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use mailbook::config::loader::load_config;
///
/// let config = load_config("mailbook.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MailbookConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MailbookError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MailbookError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: MailbookConfig = toml::from_str(&contents)
        .map_err(|e| MailbookError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        MailbookError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MailbookError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using MAILBOOK_* prefix
///
/// Environment variables follow the pattern: MAILBOOK_<SECTION>_<KEY>
/// For example: MAILBOOK_STORE_BASE_URL, MAILBOOK_EXPORT_SCOPE
fn apply_env_overrides(config: &mut MailbookConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("MAILBOOK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Store overrides
    if let Ok(val) = std::env::var("MAILBOOK_STORE_BASE_URL") {
        config.store.base_url = val;
    }
    if let Ok(val) = std::env::var("MAILBOOK_STORE_API_KEY") {
        config.store.api_key = secret_string(val);
    }
    if let Ok(val) = std::env::var("MAILBOOK_STORE_TABLE") {
        config.store.table = val;
    }
    if let Ok(val) = std::env::var("MAILBOOK_STORE_BUCKET") {
        config.store.bucket = val;
    }
    if let Ok(val) = std::env::var("MAILBOOK_STORE_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.store.timeout_seconds = secs;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("MAILBOOK_EXPORT_SCOPE") {
        match val.to_lowercase().as_str() {
            "full" => config.export.scope = ExportScope::Full,
            "filtered" => config.export.scope = ExportScope::Filtered,
            _ => {}
        }
    }
    if let Ok(val) = std::env::var("MAILBOOK_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }

    // Translation overrides
    if let Ok(val) = std::env::var("MAILBOOK_TRANSLATION_ENABLED") {
        config.translation.enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("MAILBOOK_TRANSLATION_BASE_URL") {
        config.translation.base_url = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("MAILBOOK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("MAILBOOK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
