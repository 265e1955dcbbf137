//! Widget appearance configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Color used for the grid and marks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaintColor {
    /// Host's default foreground.
    #[default]
    Default,
    /// Black.
    Black,
    /// White.
    White,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Yellow.
    Yellow,
    /// Cyan.
    Cyan,
    /// Magenta.
    Magenta,
}

/// Appearance settings for [`crate::TicTacToeView`].
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Display density (surface units per density-independent unit).
    #[serde(default = "default_density")]
    density: f32,

    /// Stroke width in density-independent units.
    #[serde(default = "default_stroke_width_dp")]
    stroke_width_dp: f32,

    /// Stroke color.
    #[serde(default)]
    color: PaintColor,

    /// Inset of the cross strokes, as a fraction of the cell side.
    #[serde(default = "default_cross_inset")]
    cross_inset: f32,
}

fn default_density() -> f32 {
    1.0
}

fn default_stroke_width_dp() -> f32 {
    4.0
}

fn default_cross_inset() -> f32 {
    0.25
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            density: default_density(),
            stroke_width_dp: default_stroke_width_dp(),
            color: PaintColor::default(),
            cross_inset: default_cross_inset(),
        }
    }
}

impl ViewConfig {
    /// Creates a configuration, validating every value.
    #[instrument]
    pub fn new(
        density: f32,
        stroke_width_dp: f32,
        color: PaintColor,
        cross_inset: f32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            density,
            stroke_width_dp,
            color,
            cross_inset,
        };
        config.validate()?;
        Ok(config)
    }

    /// Stroke width in surface units.
    pub fn stroke_width(&self) -> f32 {
        self.density * self.stroke_width_dp
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(color = %config.color, density = config.density, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ConfigError::new(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        if !(self.stroke_width_dp.is_finite() && self.stroke_width_dp >= 0.0) {
            return Err(ConfigError::new(format!(
                "stroke_width_dp must not be negative, got {}",
                self.stroke_width_dp
            )));
        }
        if !(0.0..0.5).contains(&self.cross_inset) {
            return Err(ConfigError::new(format!(
                "cross_inset must be in [0, 0.5), got {}",
                self.cross_inset
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(*config.density(), 1.0);
        assert_eq!(config.stroke_width(), 4.0);
        assert_eq!(*config.color(), PaintColor::Default);
        assert_eq!(*config.cross_inset(), 0.25);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ViewConfig::from_toml("density = 2.0\ncolor = \"cyan\"\n").unwrap();
        assert_eq!(config.stroke_width(), 8.0);
        assert_eq!(*config.color(), PaintColor::Cyan);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ViewConfig::from_toml("density = 0.0").is_err());
        assert!(ViewConfig::from_toml("cross_inset = 0.5").is_err());
        assert!(ViewConfig::from_toml("color = \"plaid\"").is_err());
        assert!(ViewConfig::from_toml("unknown = 1").is_err());
    }
}
