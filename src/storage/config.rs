//! Application configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::coach::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Coach service settings
    pub coach: CoachSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            coach: CoachSettings::default(),
        }
    }
}

impl AppConfig {
    /// Path of the check-in database inside the data directory.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("wellness.db")
    }
}

/// Coach service settings.
///
/// The API key is resolved exactly once at config load time (file value,
/// then the `OPENAI_API_KEY` environment variable) and injected into the
/// client; an absent key becomes a typed error when polishing is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachSettings {
    /// API key for the coach service
    pub api_key: Option<String>,
    /// Model name sent with each request
    pub model: String,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
}

impl Default for CoachSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "daylog", "Daylog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file.
///
/// Missing file yields defaults; the coach API key falls back to the
/// `OPENAI_API_KEY` environment variable when the file does not set one.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = get_config_path();

    let mut config = if path.exists() {
        let content =
            std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?
    } else {
        AppConfig::default()
    };

    config.data_dir = get_data_dir();

    if config.coach.api_key.is_none() {
        config.coach.api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
    }

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = get_config_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.coach.api_key.is_none());
        assert_eq!(config.coach.model, DEFAULT_MODEL);
        assert_eq!(config.coach.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_round_trip_toml() {
        let mut config = AppConfig::default();
        config.coach.api_key = Some("sk-test".to_string());

        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&content).unwrap();

        assert_eq!(parsed.coach.api_key.as_deref(), Some("sk-test"));
        assert_eq!(parsed.coach.model, config.coach.model);
    }

    #[test]
    fn test_database_path_under_data_dir() {
        let config = AppConfig {
            data_dir: PathBuf::from("/tmp/daylog-test"),
            ..Default::default()
        };
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/daylog-test/wellness.db")
        );
    }
}
