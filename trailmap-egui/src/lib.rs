//! Egui map screen for the `trailmap` overlay store.
//!
//! [`MapScreen`] draws the trail and park overlays on a pannable map, a
//! "Customize" button toggling the [`CustomizationPanel`], and the overlay info
//! dialog. All state changes go through the shared [`OverlayStore`]; the screen
//! itself only keeps the camera and the panel visibility.
//!
//! With the `init` feature, [`InitBuilder`] sets up logging and runs the screen in
//! a native window.

use std::sync::Arc;

use egui::{Align2, Frame};
use trailmap::config::MapScreenConfig;
use trailmap::OverlayStore;

pub mod camera;
mod dialog;
pub mod hit;
pub mod map_view;
mod messenger;
pub mod panel;

#[cfg(feature = "init")]
mod init;

#[cfg(test)]
mod test_input;

pub use camera::Camera;
pub use dialog::info_dialog;
#[cfg(feature = "init")]
pub use init::InitBuilder;
pub use map_view::MapView;
pub use messenger::StoreMessenger;
pub use panel::{color_picker, width_slider, CustomizationPanel, PanelResponse};

/// Complete map screen: title bar, map, customization panel and info dialog.
pub struct MapScreen {
    store: Arc<OverlayStore>,
    config: MapScreenConfig,
    map_view: MapView,
    show_panel: bool,
}

impl MapScreen {
    /// Creates a screen showing the overlays of `store`.
    pub fn new(store: Arc<OverlayStore>, config: MapScreenConfig) -> Self {
        let map_view = MapView::new(config.camera.into());
        Self {
            store,
            config,
            map_view,
            show_panel: false,
        }
    }

    /// Makes store changes trigger a repaint of `ctx`.
    pub fn attach(&self, ctx: &egui::Context) {
        self.store.set_messenger(Some(StoreMessenger::new(ctx.clone())));
    }

    /// Store backing the screen.
    pub fn store(&self) -> &Arc<OverlayStore> {
        &self.store
    }

    /// Whether the customization panel is open.
    pub fn is_panel_open(&self) -> bool {
        self.show_panel
    }

    /// Opens or closes the customization panel.
    pub fn toggle_panel(&mut self) {
        self.show_panel = !self.show_panel;
        log::debug!("Customization panel open: {}", self.show_panel);
    }

    /// Draws the screen.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("trailmap_title_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(self.config.title.as_str());
            ui.add_space(4.0);
        });

        egui::CentralPanel::default()
            .frame(Frame::NONE)
            .show(ctx, |ui| {
                self.map_view.show(ui, &self.store);
            });

        egui::Area::new(egui::Id::new("trailmap_customize_button"))
            .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                if ui.button("Customize").clicked() {
                    self.toggle_panel();
                }
            });

        if self.show_panel {
            CustomizationPanel::new(&self.store, &self.config).show(ctx);
        }

        info_dialog(ctx, &self.store);
    }
}
