//! Map canvas drawing the trail and park overlays.

use egui::{Color32, Painter, Pos2, Rect, Response, Sense, Shape, Stroke, Ui};
use trailmap::{Color, GeoPoint, OverlayKind, OverlayStore};

use crate::camera::Camera;
use crate::hit::{hits_polygon, hits_polyline};

const BACKGROUND: Color32 = Color32::from_rgb(0xEE, 0xEC, 0xE4);
const GRID: Color32 = Color32::from_rgb(0xD8, 0xD5, 0xCB);
const MAX_GRID_LINES: usize = 64;
const SCROLL_POINTS_PER_LEVEL: f64 = 120.0;

/// Converts a packed ARGB color into an egui color.
pub fn to_color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.to_rgba();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Overlay under a click at `pos`, given the projected geometries.
///
/// The trail is drawn above the park, so it is tested first.
pub fn overlay_at(
    pos: Pos2,
    trail: Option<(&[Pos2], f32)>,
    park: Option<(&[Pos2], f32)>,
) -> Option<OverlayKind> {
    if let Some((points, width)) = trail {
        if hits_polyline(pos, points, width) {
            return Some(OverlayKind::Trail);
        }
    }

    if let Some((ring, stroke_width)) = park {
        if hits_polygon(pos, ring, stroke_width) {
            return Some(OverlayKind::ParkArea);
        }
    }

    None
}

/// Pannable, zoomable map showing the overlays of an [`OverlayStore`].
///
/// Clicking an overlay opens its info dialog through
/// [`OverlayStore::show_info_for`].
pub struct MapView {
    camera: Camera,
}

impl MapView {
    /// Creates a view looking through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self { camera }
    }

    /// Current camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Draws the map into all available space and handles input.
    pub fn show(&mut self, ui: &mut Ui, store: &OverlayStore) -> Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;

        if response.dragged() {
            self.camera.pan(response.drag_delta());
        }

        if response.hovered() {
            let (scroll, pinch) = ui.input(|i| (i.smooth_scroll_delta.y, i.zoom_delta()));
            let levels = scroll as f64 / SCROLL_POINTS_PER_LEVEL + (pinch as f64).log2();
            if levels != 0.0 {
                if let Some(anchor) = response.hover_pos() {
                    self.camera.zoom_around(levels, anchor, rect);
                }
            }
        }

        painter.rect_filled(rect, 0.0, BACKGROUND);
        self.paint_grid(&painter, rect);

        let trail = store.trail();
        let park = store.park_area();
        let trail_points = trail.as_ref().map(|t| self.project_all(&t.coordinates, rect));
        let park_ring = park.as_ref().map(|p| self.project_all(&p.coordinates, rect));

        if let (Some(park), Some(ring)) = (&park, &park_ring) {
            // Fills are only correct for convex rings.
            painter.add(Shape::convex_polygon(
                ring.clone(),
                to_color32(park.fill_color),
                Stroke::new(park.stroke_width, to_color32(park.stroke_color)),
            ));
        }

        if let (Some(trail), Some(points)) = (&trail, &trail_points) {
            let color = to_color32(trail.color);
            match points.as_slice() {
                [single] => {
                    painter.circle_filled(*single, trail.width / 2.0, color);
                }
                _ => {
                    painter.add(Shape::line(points.clone(), Stroke::new(trail.width, color)));
                }
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let hit = overlay_at(
                    pos,
                    trail.as_ref().zip(trail_points.as_deref()).map(|(t, p)| (p, t.width)),
                    park.as_ref().zip(park_ring.as_deref()).map(|(a, r)| (r, a.stroke_width)),
                );

                match hit {
                    Some(kind) => {
                        log::debug!("Clicked {kind} at {pos:?}");
                        store.show_info_for(kind);
                    }
                    None => log::trace!("Click at {pos:?} missed all overlays"),
                }
            }
        }

        response
    }

    fn project_all(&self, points: &[GeoPoint], rect: Rect) -> Vec<Pos2> {
        points.iter().map(|p| self.camera.project(p, rect)).collect()
    }

    fn paint_grid(&self, painter: &Painter, rect: Rect) {
        let north_west = self.camera.unproject(rect.left_top(), rect);
        let south_east = self.camera.unproject(rect.right_bottom(), rect);

        let span = (south_east.lon - north_west.lon).abs().max(1e-9);
        let step = 10f64.powf((span / 4.0).log10().floor());
        let stroke = Stroke::new(1.0, GRID);

        let first_lon = (north_west.lon / step).ceil() as i64;
        let last_lon = (south_east.lon / step).floor() as i64;
        for i in (first_lon..=last_lon).take(MAX_GRID_LINES) {
            let x = self
                .camera
                .project(&GeoPoint::new(self.camera.center().lat, i as f64 * step), rect)
                .x;
            painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        }

        let first_lat = (south_east.lat / step).ceil() as i64;
        let last_lat = (north_west.lat / step).floor() as i64;
        for i in (first_lat..=last_lat).take(MAX_GRID_LINES) {
            let y = self
                .camera
                .project(&GeoPoint::new(i as f64 * step, self.camera.center().lon), rect)
                .y;
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        }
    }
}
