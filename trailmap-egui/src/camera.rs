//! Web Mercator camera mapping geographic points to screen positions.

use egui::{Pos2, Rect, Vec2};
use trailmap::config::CameraConfig;
use trailmap::GeoPoint;

/// Size of the whole world in points at zoom level 0.
pub const TILE_SIZE: f64 = 256.0;
/// Smallest zoom level the camera allows.
pub const MIN_ZOOM: f64 = 1.0;
/// Largest zoom level the camera allows.
pub const MAX_ZOOM: f64 = 20.0;

/// Center and zoom of the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    center: GeoPoint,
    zoom: f64,
}

impl Camera {
    /// Creates a camera. The zoom is clamped into `MIN_ZOOM..=MAX_ZOOM`.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Map center.
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Screen position of `point` when the map fills `rect`.
    pub fn project(&self, point: &GeoPoint, rect: Rect) -> Pos2 {
        let (x, y) = point.to_mercator();
        let (cx, cy) = self.center.to_mercator();
        let size = self.world_size();
        rect.center() + Vec2::new(((x - cx) * size) as f32, ((y - cy) * size) as f32)
    }

    /// Geographic point under the screen position `pos`.
    pub fn unproject(&self, pos: Pos2, rect: Rect) -> GeoPoint {
        let (cx, cy) = self.center.to_mercator();
        let size = self.world_size();
        let offset = pos - rect.center();
        GeoPoint::from_mercator(
            cx + offset.x as f64 / size,
            (cy + offset.y as f64 / size).clamp(0.0, 1.0),
        )
    }

    /// Moves the map content by `delta` screen points.
    pub fn pan(&mut self, delta: Vec2) {
        let (cx, cy) = self.center.to_mercator();
        let size = self.world_size();
        self.center = GeoPoint::from_mercator(
            (cx - delta.x as f64 / size).clamp(0.0, 1.0),
            (cy - delta.y as f64 / size).clamp(0.0, 1.0),
        );
    }

    /// Changes the zoom by `levels`, keeping the point under `anchor` in place.
    pub fn zoom_around(&mut self, levels: f64, anchor: Pos2, rect: Rect) {
        let fixed = self.unproject(anchor, rect);
        self.zoom = (self.zoom + levels).clamp(MIN_ZOOM, MAX_ZOOM);

        let (fx, fy) = fixed.to_mercator();
        let size = self.world_size();
        let offset = anchor - rect.center();
        self.center = GeoPoint::from_mercator(
            (fx - offset.x as f64 / size).clamp(0.0, 1.0),
            (fy - offset.y as f64 / size).clamp(0.0, 1.0),
        );
    }
}

impl From<CameraConfig> for Camera {
    fn from(config: CameraConfig) -> Self {
        Self::new(config.center, config.zoom)
    }
}
