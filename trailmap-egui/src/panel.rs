//! Side panel for customizing overlay colors and widths.

use egui::{Align2, Response, Slider, Ui};
use trailmap::config::{MapScreenConfig, WidthRange};
use trailmap::{Color, NamedColor, OverlayStore};

/// Radio list of palette colors.
///
/// Calls `on_pick` with the color the user clicked this frame, if any. Returns one
/// response per palette entry, in palette order.
pub fn color_picker(
    ui: &mut Ui,
    palette: &[NamedColor],
    selected: Color,
    on_pick: impl FnOnce(Color),
) -> Vec<Response> {
    let mut picked = None;
    let rows = ui
        .vertical(|ui| {
            palette
                .iter()
                .map(|entry| {
                    let response = ui.radio(entry.color == selected, entry.name.as_str());
                    if response.clicked() {
                        picked = Some(entry.color);
                    }
                    response
                })
                .collect::<Vec<_>>()
        })
        .inner;

    if let Some(color) = picked {
        on_pick(color);
    }

    rows
}

/// Labelled width slider over `range`.
///
/// The label shows `width` as stored; the handle is clamped into `range`. Calls
/// `on_change` with the new width when the user moves the slider.
pub fn width_slider(
    ui: &mut Ui,
    label: &str,
    width: f32,
    range: WidthRange,
    on_change: impl FnOnce(f32),
) -> Response {
    ui.label(width_label(label, width));

    let mut value = range.clamp(width);
    let response = ui.add(Slider::new(&mut value, range.as_range()).show_value(false));
    if response.changed() {
        on_change(range.clamp(value));
    }

    response
}

fn width_label(label: &str, width: f32) -> String {
    format!("{label}: {width:.1}")
}

/// Widget responses of one [`CustomizationPanel`] frame.
///
/// Controls of an absent overlay are not drawn and stay empty.
#[derive(Debug, Default)]
pub struct PanelResponse {
    /// Trail color rows.
    pub trail_color: Vec<Response>,
    /// Trail width slider.
    pub trail_width: Option<Response>,
    /// Park fill color rows.
    pub park_fill_color: Vec<Response>,
    /// Park border color rows.
    pub park_stroke_color: Vec<Response>,
    /// Park border width slider.
    pub park_stroke_width: Option<Response>,
}

/// Floating panel with the trail and park customization controls.
pub struct CustomizationPanel<'a> {
    store: &'a OverlayStore,
    config: &'a MapScreenConfig,
}

impl<'a> CustomizationPanel<'a> {
    /// Creates a panel editing the overlays of `store`.
    pub fn new(store: &'a OverlayStore, config: &'a MapScreenConfig) -> Self {
        Self { store, config }
    }

    /// Shows the panel in a window in the top right corner.
    pub fn show(self, ctx: &egui::Context) {
        egui::Window::new("Customize Overlays")
            .anchor(Align2::RIGHT_TOP, [-16.0, 16.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.ui(ui));
            });
    }

    /// Draws the controls into `ui` and forwards every edit to the store.
    pub fn ui(&self, ui: &mut Ui) -> PanelResponse {
        let store = self.store;
        let palette = &self.config.palette;
        let mut response = PanelResponse::default();

        ui.heading("Trail Settings");
        ui.add_space(8.0);

        if let Some(trail) = store.trail() {
            ui.label("Trail Color");
            response.trail_color = ui
                .push_id("trail_color", |ui| {
                    color_picker(ui, palette, trail.color, |color| {
                        store.update_trail_color(color)
                    })
                })
                .inner;

            response.trail_width = Some(width_slider(
                ui,
                "Trail Width",
                trail.width,
                self.config.trail_width_range,
                |width| store.update_trail_width(width),
            ));
        }

        ui.add_space(16.0);
        ui.heading("Park Area Settings");
        ui.add_space(8.0);

        if let Some(park) = store.park_area() {
            ui.label("Fill Color");
            response.park_fill_color = ui
                .push_id("park_fill_color", |ui| {
                    color_picker(ui, palette, park.fill_color, |color| {
                        store.update_park_fill_color(color)
                    })
                })
                .inner;

            ui.label("Border Color");
            response.park_stroke_color = ui
                .push_id("park_stroke_color", |ui| {
                    color_picker(ui, palette, park.stroke_color, |color| {
                        store.update_park_stroke_color(color)
                    })
                })
                .inner;

            response.park_stroke_width = Some(width_slider(
                ui,
                "Border Width",
                park.stroke_width,
                self.config.park_stroke_width_range,
                |width| store.update_park_stroke_width(width),
            ));
        }

        response
    }
}
