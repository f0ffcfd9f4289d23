//! Configuration file handling for braillify.
//!
//! Loads optional defaults from `~/.config/braillify/config.toml` or a
//! custom path; every field can be overridden on the command line.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for the conversion options.
#[derive(Debug, Deserialize, Default)]
pub struct RenderConfig {
    pub cutoff: Option<u8>,
    pub size: Option<f32>,
    pub color: Option<bool>,
    pub irc: Option<bool>,
    pub invert: Option<bool>,
    pub background: Option<String>,
    pub extended: Option<bool>,
}

/// Defaults for output handling.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Config file '{0}' not found")]
    NotFound(PathBuf),
}

impl Config {
    /// Load from the default path. A missing file yields defaults; a
    /// present but invalid file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::read(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load from an explicitly requested path, which must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::read(path)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
        .join("braillify")
        .join("config.toml")
}
