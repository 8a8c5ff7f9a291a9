//! Configuration loading
//!
//! Settings live in `config.toml` inside the platform's standard config
//! directory. A missing file means defaults; the file is never created
//! implicitly.

use crate::strings::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Browser user agent the API is used to seeing.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/67.0.3396.62 Safari/537.36";

/// Base URL of the v1 API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.gronkh.tv/v1";

/// Errors that can occur while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory location
    #[error("Failed to determine config directory location")]
    ConfigDirectoryNotFound,

    /// Failed to read the config file
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has wrong value types
    #[error("Failed to parse config file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the API, without trailing slash
    pub api_base_url: String,
    /// User agent sent with every request
    pub user_agent: String,
    /// Language of menu labels and messages
    pub language: Language,
    /// Optional request timeout; the HTTP library default applies when unset
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            language: Language::default(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Loads the configuration from `path`, or from the default location.
    ///
    /// An explicitly given path must exist. The default location may be
    /// absent, in which case defaults are returned.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_config_path()?, false),
        };

        if !required && !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(&path).map_err(|e| ConfigError::ReadFailed {
            path: path.clone(),
            source: e,
        })?;

        let config = Self::from_toml(&data).map_err(|e| ConfigError::ParseFailed {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses a TOML document, filling unset keys with defaults.
    pub fn from_toml(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }
}

/// Location of `config.toml` in the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("tv", "gronkh", "gronkh-tv")
        .ok_or(ConfigError::ConfigDirectoryNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
            language = "en"
            timeout_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("timeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let result = Config::load(Some(Path::new("/nonexistent/gronkh-tv/config.toml")));
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }
}
