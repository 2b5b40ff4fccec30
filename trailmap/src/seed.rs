//! Built-in sample data and the styling choices offered to the user.

use std::ops::RangeInclusive;

use crate::color::Color;
use crate::geo::GeoPoint;
use crate::overlay::{
    ParkArea, Trail, DEFAULT_PARK_FILL, DEFAULT_PARK_STROKE, DEFAULT_PARK_STROKE_WIDTH,
    DEFAULT_TRAIL_WIDTH,
};

/// Trail width range offered by the width slider.
pub const TRAIL_WIDTH_RANGE: RangeInclusive<f32> = 5.0..=20.0;
/// Park border width range offered by the border slider.
pub const PARK_STROKE_WIDTH_RANGE: RangeInclusive<f32> = 1.0..=10.0;

/// Initial map center, over Central Park.
pub const DEFAULT_CAMERA_CENTER: GeoPoint = GeoPoint::new(40.778687, -73.968157);
/// Initial map zoom level.
pub const DEFAULT_CAMERA_ZOOM: f64 = 13.0;

const TRAIL_POINTS: [GeoPoint; 5] = [
    GeoPoint::new(40.768697, -73.981818),
    GeoPoint::new(40.768102, -73.971523),
    GeoPoint::new(40.782865, -73.965355),
    GeoPoint::new(40.782083, -73.971222),
    GeoPoint::new(40.778687, -73.981238),
];

const PARK_POINTS: [GeoPoint; 4] = [
    GeoPoint::new(40.768102, -73.981818),
    GeoPoint::new(40.768102, -73.971523),
    GeoPoint::new(40.782865, -73.971523),
    GeoPoint::new(40.782865, -73.981818),
];

/// Color with a label, as shown by the color picker.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedColor {
    /// Label next to the radio button.
    pub name: String,
    /// Color value.
    pub color: Color,
}

impl NamedColor {
    /// Creates a new palette entry.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Colors offered by the picker, in display order.
pub const PALETTE: [(&str, Color); 5] = [
    ("Blue", Color::BLUE),
    ("Green", Color::GREEN),
    ("Red", Color::RED),
    ("Orange", Color::ORANGE),
    ("Purple", Color::PURPLE),
];

/// [`PALETTE`] as owned entries.
pub fn default_palette() -> Vec<NamedColor> {
    PALETTE
        .iter()
        .map(|(name, color)| NamedColor::new(*name, *color))
        .collect()
}

/// Sample loop trail around Central Park.
pub fn sample_trail() -> Trail {
    Trail {
        id: "trail_1".into(),
        name: "Central Park Loop Trail".into(),
        description: "A beautiful 6.1 mile loop trail around Central Park. Perfect for walking, running, and cycling.".into(),
        coordinates: TRAIL_POINTS.to_vec(),
        color: Color::BLUE,
        width: DEFAULT_TRAIL_WIDTH,
    }
}

/// Sample rectangle covering Central Park.
pub fn sample_park_area() -> ParkArea {
    ParkArea {
        id: "park_1".into(),
        name: "Central Park".into(),
        description: "Central Park is an urban park in New York City located between the Upper West and Upper East Sides of Manhattan.".into(),
        coordinates: PARK_POINTS.to_vec(),
        fill_color: DEFAULT_PARK_FILL,
        stroke_color: DEFAULT_PARK_STROKE,
        stroke_width: DEFAULT_PARK_STROKE_WIDTH,
    }
}

/// Entities a store is seeded with on initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedData {
    /// Initial trail.
    pub trail: Option<Trail>,
    /// Initial park area.
    pub park_area: Option<ParkArea>,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            trail: Some(sample_trail()),
            park_area: Some(sample_park_area()),
        }
    }
}
