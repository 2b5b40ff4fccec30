use egui::{Id, Modal, Response};
use trailmap::OverlayStore;

/// Shows the overlay info dialog while the store says it is visible.
///
/// Clicking "OK", pressing escape or clicking outside the dialog hides it. Returns
/// the response of the "OK" button while the dialog is shown.
pub fn info_dialog(ctx: &egui::Context, store: &OverlayStore) -> Option<Response> {
    let state = store.dialog_state();
    let (title, body) = state.contents()?;

    let modal = Modal::new(Id::new("overlay_info_dialog")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.heading(title);
        ui.add_space(8.0);
        ui.label(body);
        ui.add_space(12.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.button("OK")
        })
        .inner
    });

    if modal.inner.clicked() || modal.should_close() {
        store.hide_overlay_info();
    }

    Some(modal.inner)
}
