use trailmap::Messenger;

/// Messenger that asks egui to repaint when the overlay store changes.
#[derive(Clone)]
pub struct StoreMessenger {
    context: egui::Context,
}

impl StoreMessenger {
    /// Creates a messenger for the given egui context.
    pub fn new(context: egui::Context) -> Self {
        Self { context }
    }
}

impl Messenger for StoreMessenger {
    fn request_redraw(&self) {
        self.context.request_repaint();
    }
}
