//! Configuration loading, validation, and management for Trivium.
//!
//! Loads configuration from `~/.trivium/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use trivium_core::pattern::PatternCatalog;

/// The root configuration structure.
///
/// Maps directly to `~/.trivium/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the remote lens service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Pre-existing session token; when unset a session is negotiated at
    /// engine construction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pattern applied when the CLI is given neither lenses nor a pattern
    #[serde(default = "default_pattern")]
    pub default_pattern: String,

    /// Blend ratio used when synthesizing without an explicit --blend
    #[serde(default = "default_blend")]
    pub default_blend: f64,
}

fn default_api_url() -> String {
    "http://localhost:5000".into()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_pattern() -> String {
    "CODE_REVIEW".into()
}
fn default_blend() -> f64 {
    0.5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            session_id: None,
            timeout_secs: default_timeout_secs(),
            default_pattern: default_pattern(),
            default_blend: default_blend(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.trivium/config.toml).
    ///
    /// Environment variables override file values:
    /// - `TRIVIUM_API_URL`
    /// - `TRIVIUM_SESSION_ID`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(url) = std::env::var("TRIVIUM_API_URL") {
            config.api_url = url;
        }
        if let Ok(session) = std::env::var("TRIVIUM_SESSION_ID") {
            config.session_id = Some(session);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".trivium")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::ValidationError("api_url must not be empty".into()));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError("timeout_secs must be > 0".into()));
        }

        if !(0.0..=1.0).contains(&self.default_blend) {
            return Err(ConfigError::ValidationError(
                "default_blend must be between 0.0 and 1.0".into(),
            ));
        }

        if PatternCatalog::builtin().get(&self.default_pattern).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "default_pattern '{}' is not a known pattern",
                self.default_pattern
            )));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for first-run setup).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
