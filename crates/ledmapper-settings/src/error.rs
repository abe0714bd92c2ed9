//! Errors raised while reading, writing or checking the LedMapper config.
//!
//! [`ConfigError`] covers bad values in the `mapping`, `trace` and `export`
//! sections; [`SettingsError`] wraps it together with file and parse
//! failures.

use std::io;
use thiserror::Error;

/// Failure to load or persist a [`Config`](crate::Config).
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Config file present but unreadable as a config
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// Config could not be written back
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// No per-user config directory on this platform
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// Reading or writing the config file
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// `.json` config that does not parse
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// `.toml` config that does not parse
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Parsed config with a rejected value
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Rejected config contents.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File extension other than `.json` or `.toml`
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Value outside its allowed range, keyed by `section.field`
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },
}

/// Result of loading or saving settings.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result of validating a config.
pub type ConfigResult<T> = Result<T, ConfigError>;
