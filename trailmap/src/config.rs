//! Map screen configuration.
//!
//! Every field has a default matching the built-in sample, so a configuration file
//! only needs to list what it changes:
//!
//! ```json
//! { "title": "My Trails", "camera": { "center": { "lat": 51.5, "lon": -0.12 }, "zoom": 12 } }
//! ```

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geo::GeoPoint;
use crate::seed::{
    default_palette, NamedColor, DEFAULT_CAMERA_CENTER, DEFAULT_CAMERA_ZOOM,
    PARK_STROKE_WIDTH_RANGE, TRAIL_WIDTH_RANGE,
};

/// Initial map position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Map center.
    pub center: GeoPoint,
    /// Zoom level, 0 shows the whole world.
    pub zoom: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CAMERA_CENTER,
            zoom: DEFAULT_CAMERA_ZOOM,
        }
    }
}

/// Inclusive range of widths a slider offers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthRange {
    /// Smallest width.
    pub min: f32,
    /// Largest width.
    pub max: f32,
}

impl WidthRange {
    /// Clamps `width` into the range.
    pub fn clamp(&self, width: f32) -> f32 {
        width.clamp(self.min, self.max)
    }

    /// The range as a `RangeInclusive`.
    pub fn as_range(&self) -> RangeInclusive<f32> {
        self.min..=self.max
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let valid = self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.min <= self.max;

        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl From<RangeInclusive<f32>> for WidthRange {
    fn from(range: RangeInclusive<f32>) -> Self {
        Self {
            min: *range.start(),
            max: *range.end(),
        }
    }
}

/// Settings of the map screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapScreenConfig {
    /// Window or app bar title.
    pub title: String,
    /// Initial camera.
    pub camera: CameraConfig,
    /// Range of the trail width slider.
    pub trail_width_range: WidthRange,
    /// Range of the park border width slider.
    pub park_stroke_width_range: WidthRange,
    /// Colors offered by the color pickers.
    pub palette: Vec<NamedColor>,
}

impl Default for MapScreenConfig {
    fn default() -> Self {
        Self {
            title: "Trail Map Explorer".to_string(),
            camera: CameraConfig::default(),
            trail_width_range: TRAIL_WIDTH_RANGE.into(),
            park_stroke_width_range: PARK_STROKE_WIDTH_RANGE.into(),
            palette: default_palette(),
        }
    }
}

impl MapScreenConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded map screen configuration from {}", path.display());
        Ok(config)
    }

    /// Reads the configuration file if it exists and is valid, falling back to
    /// `fallback` otherwise.
    pub fn from_file_or(path: impl AsRef<Path>, fallback: Self) -> Self {
        let path = path.as_ref();
        Self::from_file(path).unwrap_or_else(|err| {
            log::warn!(
                "Failed to load configuration from {}: {err}. Using defaults.",
                path.display()
            );
            fallback
        })
    }

    /// Checks that both width ranges are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.trail_width_range.validate("trail width")?;
        self.park_stroke_width_range.validate("park stroke width")?;
        Ok(())
    }
}
