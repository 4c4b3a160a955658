//! Configuration file handling for ~/.tilestitch/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use super::settings::ConfigFile;
use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.tilestitch/config.ini).
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Parse configuration from INI text.
    pub fn from_ini_str(content: &str) -> Result<Self, ConfigFileError> {
        let ini = Ini::load_from_str(content).map_err(ini::Error::Parse)?;
        super::parser::parse_ini(&ini)
    }

    /// Render the configuration as commented INI text.
    pub fn to_ini_string(&self) -> String {
        super::writer::to_config_string(self)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Write a default config file at `path` unless one is already there.
    ///
    /// Returns `true` if a file was written.
    pub fn ensure_exists_at(path: &Path) -> Result<bool, ConfigFileError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }
}

/// Get the path to the config directory (~/.tilestitch).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tilestitch")
}

/// Get the path to the config file (~/.tilestitch/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
