//! Shared configuration for the signature pad
//!
//! This crate is the single source of truth for surface dimensions, display
//! scaling and the default ink style used by `signature-pad`.

use serde::{Deserialize, Serialize};

/// Default surface width in logical units
pub const DEFAULT_WIDTH: u32 = 600;

/// Default surface height in logical units
pub const DEFAULT_HEIGHT: u32 = 200;

/// Default scale factor (1.0 = one pixel per logical unit)
pub const DEFAULT_SCALE: f32 = 1.0;

/// Default ink width in logical units
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Opaque black [r, g, b, a]
pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Opaque white [r, g, b, a]
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Errors produced while loading a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Surface and ink configuration for a signature pad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureConfig {
    /// Surface width in logical units
    pub width: u32,
    /// Surface height in logical units
    pub height: u32,
    /// Scale factor for DPI scaling
    pub scale: f32,
    /// Ink width in logical units
    pub stroke_width: f32,
    /// Ink color [r, g, b, a], components in 0..=1
    pub stroke_color: [f32; 4],
    /// Background color [r, g, b, a], components in 0..=1
    pub background_color: [f32; 4],
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: BLACK,
            background_color: WHITE,
        }
    }
}

impl SignatureConfig {
    /// Create a new config with the given dimensions and default style
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Parse a config from JSON. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::Invalid(format!("scale must be > 0, got {}", self.scale)));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "stroke_width must be > 0, got {}",
                self.stroke_width
            )));
        }
        for (name, color) in [
            ("stroke_color", self.stroke_color),
            ("background_color", self.background_color),
        ] {
            if color.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(ConfigError::Invalid(format!(
                    "{name} components must be in 0..=1, got {color:?}"
                )));
            }
        }
        Ok(())
    }

    /// Get scaled width (for physical pixel calculations)
    pub fn scaled_width(&self) -> u32 {
        (self.width as f32 * self.scale).round() as u32
    }

    /// Get scaled height (for physical pixel calculations)
    pub fn scaled_height(&self) -> u32 {
        (self.height as f32 * self.scale).round() as u32
    }
}
