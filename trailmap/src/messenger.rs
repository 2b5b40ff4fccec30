//! Notification hook for the presentation layer.

/// Receives notifications from the [`OverlayStore`](crate::OverlayStore) when its
/// state changes.
///
/// Calls happen synchronously inside the mutating method, after the new value is
/// already visible to readers, so an implementation can read the store right away.
pub trait Messenger: Send + Sync {
    /// Signals that the overlays or the dialog must be drawn again.
    fn request_redraw(&self);
}

impl<T: Messenger + ?Sized> Messenger for std::sync::Arc<T> {
    fn request_redraw(&self) {
        (**self).request_redraw()
    }
}

impl<T: Messenger + ?Sized> Messenger for Box<T> {
    fn request_redraw(&self) {
        (**self).request_redraw()
    }
}
