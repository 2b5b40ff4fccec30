//! Error types.

use thiserror::Error;

use crate::overlay::OverlayKind;

/// Error returned when a string cannot be parsed as an ARGB color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string has a number of hex digits other than 6 or 8.
    #[error("expected 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),

    /// The string contains a character that is not a hex digit.
    #[error("invalid hex digit in color '{0}'")]
    InvalidDigit(String),
}

/// Error constructing an overlay entity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// The geometry has fewer points than the overlay type needs.
    #[error("{kind} needs at least {required} points, got {actual}")]
    TooFewPoints {
        /// Overlay being constructed.
        kind: OverlayKind,
        /// Minimum number of points.
        required: usize,
        /// Number of points given.
        actual: usize,
    },
}

/// Error loading a map screen configuration.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Configuration is not valid JSON or does not match the schema.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A width range is empty, negative or not finite.
    #[error("invalid {name} range {min}..={max}")]
    InvalidRange {
        /// Name of the configuration field.
        name: &'static str,
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },
}
