//! Configuration file support
//!
//! Handles parsing of `.app-schema.toml` configuration files and
//! environment variable overrides.

use crate::export::ExportFormat;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default configuration filename
pub const CONFIG_FILENAME: &str = ".app-schema.toml";

/// Default template turning a bare application name into its URL
pub const DEFAULT_URL_TEMPLATE: &str = "https://{name}.bubbleapps.io";

/// Default path of the schema document relative to the application URL
pub const DEFAULT_SCHEMA_PATH: &str = "/api/1.1/meta";

/// Default key wrapping the type map inside the schema document
pub const DEFAULT_TYPES_KEY: &str = "user_types";

/// Environment variable for the application URL template
pub const ENV_URL_TEMPLATE: &str = "APP_SCHEMA_URL_TEMPLATE";

/// Environment variable for the schema document path
pub const ENV_SCHEMA_PATH: &str = "APP_SCHEMA_PATH";

/// Environment variable for the request timeout in milliseconds
pub const ENV_TIMEOUT_MS: &str = "APP_SCHEMA_TIMEOUT_MS";

/// Environment variable for the default output format
pub const ENV_FORMAT: &str = "APP_SCHEMA_FORMAT";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Configuration error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Schema source configuration section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SourceSection {
    /// Template for bare application names; `{name}` is replaced
    #[serde(default = "default_url_template")]
    pub url_template: String,

    /// Path of the schema document, appended to the application URL
    #[serde(default = "default_schema_path")]
    pub schema_path: String,

    /// Key wrapping the type map in the schema document; empty means the
    /// document is the type map itself
    #[serde(default = "default_types_key")]
    pub types_key: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Number of attempts before giving up on a schema that is not ready
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay between attempts
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_schema_path() -> String {
    DEFAULT_SCHEMA_PATH.to_string()
}

fn default_types_key() -> String {
    DEFAULT_TYPES_KEY.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_max_attempts() -> u32 {
    5
}

fn default_poll_interval_ms() -> u64 {
    1_000
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            schema_path: default_schema_path(),
            types_key: default_types_key(),
            timeout_ms: default_timeout_ms(),
            max_attempts: default_max_attempts(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl SourceSection {
    /// Wrapper key, or `None` when the document is the type map itself
    pub fn types_key(&self) -> Option<&str> {
        Some(self.types_key.as_str()).filter(|k| !k.is_empty())
    }
}

/// Export configuration section
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ExportSection {
    /// Format used when none is given on the command line
    #[serde(default)]
    pub default_format: ExportFormat,
}

/// Main configuration structure
///
/// Represents the `.app-schema.toml` configuration file format.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppSchemaConfig {
    /// Schema source configuration
    #[serde(default)]
    pub source: SourceSection,

    /// Export configuration
    #[serde(default)]
    pub export: ExportSection,
}

impl AppSchemaConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a directory
    ///
    /// Looks for `.app-schema.toml` in the directory.
    /// Falls back to defaults if not found.
    pub fn load(dir: &Path) -> ConfigResult<Self> {
        Self::load_file(&dir.join(CONFIG_FILENAME))
    }

    /// Load configuration from an explicit file path, falling back to defaults if absent
    pub fn load_file(config_path: &Path) -> ConfigResult<Self> {
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .map_err(|e| ConfigError::IoError(format!("Failed to read config: {}", e)))?;

            Self::parse(&content)?
        } else {
            Self::default()
        };

        // Apply environment variable overrides
        config.apply_env_overrides();

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> ConfigResult<Self> {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("Failed to parse config: {}", e)))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(template) = std::env::var(ENV_URL_TEMPLATE) {
            self.source.url_template = template;
        }

        if let Ok(path) = std::env::var(ENV_SCHEMA_PATH) {
            self.source.schema_path = path;
        }

        if let Ok(timeout) = std::env::var(ENV_TIMEOUT_MS)
            && let Ok(timeout) = timeout.parse()
        {
            self.source.timeout_ms = timeout;
        }

        if let Ok(format) = std::env::var(ENV_FORMAT) {
            self.export.default_format = ExportFormat::from_token(&format);
        }
    }
}

/// Generate a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# App Schema SDK Configuration

[source]
# Template for bare application names; {name} is replaced with the name
url_template = "https://{name}.bubbleapps.io"

# Path of the schema document, appended to the application URL
schema_path = "/api/1.1/meta"

# Key wrapping the type map in the schema document ("" if the document is the map itself)
types_key = "user_types"

# Per-request timeout in milliseconds
timeout_ms = 30000

# Attempts while waiting for the schema to become available
max_attempts = 5
poll_interval_ms = 1000

[export]
# Default output format: "dbml", "mermaid" or "json"
default_format = "dbml"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppSchemaConfig::new();
        assert_eq!(config.source.url_template, DEFAULT_URL_TEMPLATE);
        assert_eq!(config.source.types_key(), Some(DEFAULT_TYPES_KEY));
        assert_eq!(config.source.max_attempts, 5);
        assert_eq!(config.export.default_format, ExportFormat::Dbml);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[source]
url_template = "http://{name}.localhost:8080"
types_key = ""
max_attempts = 2

[export]
default_format = "mermaid"
"#;
        let config = AppSchemaConfig::parse(toml).unwrap();
        assert_eq!(config.source.url_template, "http://{name}.localhost:8080");
        assert_eq!(config.source.types_key(), None);
        assert_eq!(config.source.max_attempts, 2);
        assert_eq!(config.source.schema_path, DEFAULT_SCHEMA_PATH);
        assert_eq!(config.export.default_format, ExportFormat::Mermaid);
    }

    #[test]
    fn test_sample_config_parses() {
        let config = AppSchemaConfig::parse(sample_config()).unwrap();
        assert_eq!(config.source, SourceSection::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            AppSchemaConfig::parse("[source]\nmax_attempts = \"many\""),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempdir().unwrap();
        assert_eq!(
            AppSchemaConfig::load(dir.path()).unwrap().source.poll_interval_ms,
            1_000
        );

        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[source]\npoll_interval_ms = 10\n",
        )
        .unwrap();
        let loaded = AppSchemaConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.source.poll_interval_ms, 10);
        assert_eq!(loaded.source.max_attempts, 5);
    }
}
