//! Configuration loaded from a TOML file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default store directory, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = ".tourney-board";

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub admin: AdminConfig,
    pub logging: LoggingConfig,
}

/// Where the store lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

/// The shared admin credential and admin view settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    /// How many entries the recent-matches view shows.
    pub recent_limit: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            recent_limit: 10,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings for the CLI subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"tourney_board=debug"`.
    pub level: String,
    pub format: LogFormat,
    /// `"stdout"`, `"stderr"`, or a file path to append to.
    pub output: String,
    pub color: bool,
    pub target: bool,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
            output: "stderr".to_string(),
            color: true,
            target: false,
            timestamps: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        Self::parse(&content)
    }

    /// Load from `path` if given, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[store]
path = "/var/lib/tourney-board"

[admin]
username = "host"
password = "s3cret"
recent_limit = 25

[logging]
level = "tourney_board=debug"
format = "json"
output = "board.log"
color = false
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.store.path, PathBuf::from("/var/lib/tourney-board"));
        assert_eq!(config.admin.username, "host");
        assert_eq!(config.admin.password, "s3cret");
        assert_eq!(config.admin.recent_limit, 25);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.output, "board.log");
        assert!(!config.logging.color);
        assert!(config.logging.timestamps);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.store.path, PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.admin.recent_limit, 10);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_partial_section() {
        let config = Config::parse("[admin]\npassword = \"other\"\n").unwrap();
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.admin.password, "other");
    }

    #[test]
    fn test_bad_format_rejected() {
        assert!(matches!(
            Config::parse("[logging]\nformat = \"xml\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::from_file("/definitely/not/here.toml"),
            Err(ConfigError::Io(..))
        ));
    }
}
