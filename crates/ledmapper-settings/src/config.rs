//! Application configuration
//!
//! Three sections (mapping, trace, export), each with defaults, stored as
//! TOML or JSON depending on the file extension.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Mapping editor defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingSettings {
    /// Initial ring tolerance, in percent of the shorter grid side
    pub default_threshold: f64,
    /// Increment for one threshold nudge
    pub threshold_step: f64,
    /// Largest gap between raw contour vertices before interpolation
    pub max_gap_step: f64,
}

impl Default for MappingSettings {
    fn default() -> Self {
        Self {
            default_threshold: 3.0,
            threshold_step: 0.1,
            max_gap_step: 1.0,
        }
    }
}

/// Outline tracing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    /// Raster pixels per grid cell
    pub pixels_per_cell: u32,
    /// Canny low threshold
    pub canny_low: f32,
    /// Canny high threshold
    pub canny_high: f32,
    /// Shorter contours are discarded
    pub min_contour_points: usize,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            pixels_per_cell: 10,
            canny_low: 50.0,
            canny_high: 100.0,
            min_contour_points: 2,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Default output directory
    pub output_directory: PathBuf,
    /// Whether to pretty-print the exported JSON
    pub pretty: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            pretty: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub mapping: MappingSettings,
    pub trace: TraceSettings,
    pub export: ExportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/ledmapper/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("ledmapper").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, else the default path if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(path) if path.exists() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let mapping = &self.mapping;
        if !mapping.default_threshold.is_finite() || mapping.default_threshold < 0.0 {
            return Err(out_of_range("mapping.default_threshold", mapping.default_threshold));
        }
        if !mapping.threshold_step.is_finite() || mapping.threshold_step <= 0.0 {
            return Err(out_of_range("mapping.threshold_step", mapping.threshold_step));
        }
        if !mapping.max_gap_step.is_finite() || mapping.max_gap_step <= 0.0 {
            return Err(out_of_range("mapping.max_gap_step", mapping.max_gap_step));
        }

        let trace = &self.trace;
        if trace.pixels_per_cell == 0 {
            return Err(out_of_range("trace.pixels_per_cell", trace.pixels_per_cell));
        }
        if trace.canny_low < 0.0 || trace.canny_low > trace.canny_high {
            return Err(out_of_range("trace.canny_low", trace.canny_low));
        }
        if trace.min_contour_points == 0 {
            return Err(out_of_range("trace.min_contour_points", trace.min_contour_points));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
