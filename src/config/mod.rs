//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include drawing defaults,
//! zoom behaviour, canvas size and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, ViewConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#000000"
/// default_line_width = 2.0
/// default_tool = "pen"
///
/// [view]
/// zoom_step = 0.1
///
/// [canvas]
/// width = 800
/// height = 600
///
/// [export]
/// watermark_text = "© Your Mark"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing tool defaults (color, width, tool)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Zoom settings
    #[serde(default)]
    pub view: ViewConfig,

    /// Drawing surface size
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Export output settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_line_width`: 0.5 - 50.0
    /// - `zoom_step`: 0.01 - 1.0
    /// - `initial_zoom`: 0.05 - 10.0
    /// - `canvas.width` / `canvas.height`: 1 - 16384
    /// - `watermark_size`: 6.0 - 96.0
    pub fn validate_and_clamp(&mut self) {
        if !(0.5..=50.0).contains(&self.drawing.default_line_width) {
            log::warn!(
                "Invalid default_line_width {:.1}, clamping to 0.5-50.0 range",
                self.drawing.default_line_width
            );
            self.drawing.default_line_width = clamp_or(self.drawing.default_line_width, 0.5, 50.0);
        }

        if !(0.01..=1.0).contains(&self.view.zoom_step) {
            log::warn!(
                "Invalid zoom_step {:.3}, clamping to 0.01-1.0 range",
                self.view.zoom_step
            );
            self.view.zoom_step = clamp_or(self.view.zoom_step, 0.01, 1.0);
        }

        if !(0.05..=10.0).contains(&self.view.initial_zoom) {
            log::warn!(
                "Invalid initial_zoom {:.2}, clamping to 0.05-10.0 range",
                self.view.initial_zoom
            );
            self.view.initial_zoom = clamp_or(self.view.initial_zoom, 0.05, 10.0);
        }

        if !(1..=16384).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-16384 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 16384);
        }

        if !(1..=16384).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-16384 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 16384);
        }

        if !(6.0..=96.0).contains(&self.export.watermark_size) {
            log::warn!(
                "Invalid watermark_size {:.1}, clamping to 6.0-96.0 range",
                self.export.watermark_size
            );
            self.export.watermark_size = clamp_or(self.export.watermark_size, 6.0, 96.0);
        }

        if !self.drawing.default_color.is_valid() {
            log::warn!(
                "Invalid default_color {:?}, falling back to black",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("#000000".to_string());
        }

        if let Some(spec) = &self.export.watermark_color
            && !spec.is_valid()
        {
            log::warn!("Invalid watermark_color {:?}, using pen color", spec);
            self.export.watermark_color = None;
        }

        if let Some(spec) = &self.export.background
            && !spec.is_valid()
        {
            log::warn!("Invalid export background {:?}, keeping it transparent", spec);
            self.export.background = None;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses configuration from a TOML string without validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path or
    /// the file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Clamps a value, mapping NaN to the lower bound.
fn clamp_or(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
