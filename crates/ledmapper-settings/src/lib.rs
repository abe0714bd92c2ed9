//! LedMapper Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{Config, ExportSettings, MappingSettings, TraceSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
