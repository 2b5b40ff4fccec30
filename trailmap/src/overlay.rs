//! Trail and park overlay entities.

use std::fmt::{Display, Formatter};

use crate::color::Color;
use crate::error::OverlayError;
use crate::geo::GeoPoint;

/// Default trail line width.
pub const DEFAULT_TRAIL_WIDTH: f32 = 10.0;
/// Default park fill, semi-transparent green.
pub const DEFAULT_PARK_FILL: Color = Color::from_argb(0x3300FF00);
/// Default park border, opaque green.
pub const DEFAULT_PARK_STROKE: Color = Color::from_argb(0xFF00FF00);
/// Default park border width.
pub const DEFAULT_PARK_STROKE_WIDTH: f32 = 5.0;

/// Which of the two overlays an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// The hiking trail polyline.
    Trail,
    /// The park boundary polygon.
    ParkArea,
}

impl OverlayKind {
    /// Minimum number of points a geometry of this kind must have.
    pub const fn min_points(&self) -> usize {
        match self {
            OverlayKind::Trail => 1,
            OverlayKind::ParkArea => 3,
        }
    }
}

impl Display for OverlayKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayKind::Trail => write!(f, "trail"),
            OverlayKind::ParkArea => write!(f, "park area"),
        }
    }
}

fn check_points(kind: OverlayKind, coordinates: &[GeoPoint]) -> Result<(), OverlayError> {
    if coordinates.len() < kind.min_points() {
        return Err(OverlayError::TooFewPoints {
            kind,
            required: kind.min_points(),
            actual: coordinates.len(),
        });
    }

    Ok(())
}

/// Hiking trail drawn as a polyline.
///
/// The order of `coordinates` defines the path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trail {
    /// Unique identifier.
    pub id: String,
    /// Display name, used as the info dialog title.
    pub name: String,
    /// Longer text shown in the info dialog.
    pub description: String,
    /// Path points, at least one.
    pub coordinates: Vec<GeoPoint>,
    /// Line color.
    pub color: Color,
    /// Line width in display units.
    pub width: f32,
}

impl Trail {
    /// Creates a trail with the default styling.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        coordinates: Vec<GeoPoint>,
    ) -> Result<Self, OverlayError> {
        check_points(OverlayKind::Trail, &coordinates)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            coordinates,
            color: Color::BLUE,
            width: DEFAULT_TRAIL_WIDTH,
        })
    }

    /// Returns a copy with the color replaced.
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    /// Returns a copy with the width replaced.
    pub fn with_width(&self, width: f32) -> Self {
        Self {
            width,
            ..self.clone()
        }
    }
}

/// Park or other area of interest drawn as a polygon.
///
/// The ring is implicitly closed: the last point connects back to the first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkArea {
    /// Unique identifier.
    pub id: String,
    /// Display name, used as the info dialog title.
    pub name: String,
    /// Longer text shown in the info dialog.
    pub description: String,
    /// Polygon ring, at least three points.
    pub coordinates: Vec<GeoPoint>,
    /// Fill color, usually translucent.
    pub fill_color: Color,
    /// Border color.
    pub stroke_color: Color,
    /// Border width in display units.
    pub stroke_width: f32,
}

impl ParkArea {
    /// Creates a park area with the default styling.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        coordinates: Vec<GeoPoint>,
    ) -> Result<Self, OverlayError> {
        check_points(OverlayKind::ParkArea, &coordinates)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            coordinates,
            fill_color: DEFAULT_PARK_FILL,
            stroke_color: DEFAULT_PARK_STROKE,
            stroke_width: DEFAULT_PARK_STROKE_WIDTH,
        })
    }

    /// Returns a copy with the fill color replaced.
    pub fn with_fill_color(&self, fill_color: Color) -> Self {
        Self {
            fill_color,
            ..self.clone()
        }
    }

    /// Returns a copy with the border color replaced.
    pub fn with_stroke_color(&self, stroke_color: Color) -> Self {
        Self {
            stroke_color,
            ..self.clone()
        }
    }

    /// Returns a copy with the border width replaced.
    pub fn with_stroke_width(&self, stroke_width: f32) -> Self {
        Self {
            stroke_width,
            ..self.clone()
        }
    }
}
