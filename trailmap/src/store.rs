//! The overlay state store.

use std::sync::Arc;

use log::{debug, info, trace};
use parking_lot::RwLock;
use tokio::sync::watch;

use crate::color::Color;
use crate::dialog::DialogState;
use crate::messenger::Messenger;
use crate::overlay::{OverlayKind, ParkArea, Trail};
use crate::seed::SeedData;

/// Single owner of the current trail, park area and info dialog state.
///
/// Each of the three values lives in its own [`watch`] channel. Readers either take
/// a snapshot ([`OverlayStore::trail`] and friends) or subscribe to a channel and
/// get woken up on every change. Updates replace the whole value instead of
/// mutating it, so a snapshot never observes a half-applied change.
///
/// All update methods are total: updating an overlay that is not present does
/// nothing, and widths are stored as given. Range limits belong to the controls
/// that produce the values.
///
/// Writing a value equal to the current one is not published.
pub struct OverlayStore {
    trail: watch::Sender<Option<Trail>>,
    park_area: watch::Sender<Option<ParkArea>>,
    dialog: watch::Sender<DialogState>,
    messenger: RwLock<Option<Arc<dyn Messenger>>>,
}

impl OverlayStore {
    /// Creates a store seeded with the sample trail and park area.
    pub fn new() -> Self {
        let store = Self::empty();
        store.initialize();
        store
    }

    /// Creates a store with no overlays and a hidden dialog.
    pub fn empty() -> Self {
        Self {
            trail: watch::Sender::new(None),
            park_area: watch::Sender::new(None),
            dialog: watch::Sender::new(DialogState::default()),
            messenger: RwLock::new(None),
        }
    }

    /// Creates a store seeded with the given entities.
    pub fn with_seed(seed: SeedData) -> Self {
        let store = Self::empty();
        store.load_seed(seed);
        store
    }

    /// Populates the store with the sample trail and park area.
    pub fn initialize(&self) {
        self.load_seed(SeedData::default());
    }

    fn load_seed(&self, seed: SeedData) {
        info!(
            "Seeding overlay store: trail={:?}, park_area={:?}",
            seed.trail.as_ref().map(|t| &t.id),
            seed.park_area.as_ref().map(|p| &p.id),
        );

        self.trail.send_replace(seed.trail);
        self.park_area.send_replace(seed.park_area);
        self.request_redraw();
    }

    /// Sets the messenger notified after every published change.
    ///
    /// The messenger is called without any store lock held, so it may read from
    /// or update the store, including replacing itself.
    pub fn set_messenger(&self, messenger: Option<impl Messenger + 'static>) {
        *self.messenger.write() = messenger.map(|m| Arc::new(m) as Arc<dyn Messenger>);
    }

    /// Current trail, if any.
    pub fn trail(&self) -> Option<Trail> {
        self.trail.borrow().clone()
    }

    /// Current park area, if any.
    pub fn park_area(&self) -> Option<ParkArea> {
        self.park_area.borrow().clone()
    }

    /// Current info dialog state.
    pub fn dialog_state(&self) -> DialogState {
        self.dialog.borrow().clone()
    }

    /// Receiver observing the trail slot.
    pub fn subscribe_trail(&self) -> watch::Receiver<Option<Trail>> {
        self.trail.subscribe()
    }

    /// Receiver observing the park area slot.
    pub fn subscribe_park_area(&self) -> watch::Receiver<Option<ParkArea>> {
        self.park_area.subscribe()
    }

    /// Receiver observing the dialog state.
    pub fn subscribe_dialog(&self) -> watch::Receiver<DialogState> {
        self.dialog.subscribe()
    }

    /// Replaces the trail color. Does nothing if there is no trail.
    pub fn update_trail_color(&self, color: Color) {
        self.update_slot(&self.trail, "trail color", |trail| trail.with_color(color));
    }

    /// Replaces the trail width. Does nothing if there is no trail.
    pub fn update_trail_width(&self, width: f32) {
        self.update_slot(&self.trail, "trail width", |trail| trail.with_width(width));
    }

    /// Replaces the park fill color. Does nothing if there is no park area.
    pub fn update_park_fill_color(&self, color: Color) {
        self.update_slot(&self.park_area, "park fill color", |park| {
            park.with_fill_color(color)
        });
    }

    /// Replaces the park border color. Does nothing if there is no park area.
    pub fn update_park_stroke_color(&self, color: Color) {
        self.update_slot(&self.park_area, "park stroke color", |park| {
            park.with_stroke_color(color)
        });
    }

    /// Replaces the park border width. Does nothing if there is no park area.
    pub fn update_park_stroke_width(&self, width: f32) {
        self.update_slot(&self.park_area, "park stroke width", |park| {
            park.with_stroke_width(width)
        });
    }

    /// Shows the info dialog with the given contents, replacing whatever it showed
    /// before.
    pub fn show_overlay_info(&self, title: impl Into<String>, body: impl Into<String>) {
        let new_state = DialogState::shown(title, body);
        let changed = self.dialog.send_if_modified(|state| {
            if *state == new_state {
                return false;
            }

            *state = new_state;
            true
        });

        if changed {
            debug!("Info dialog shown: {:?}", self.dialog.borrow().title);
            self.request_redraw();
        }
    }

    /// Hides the info dialog. The last title and body are kept.
    pub fn hide_overlay_info(&self) {
        let changed = self.dialog.send_if_modified(|state| {
            let was_visible = state.visible;
            state.visible = false;
            was_visible
        });

        if changed {
            debug!("Info dialog hidden");
            self.request_redraw();
        }
    }

    /// Shows the info dialog for the given overlay, using its name as the title and
    /// its description as the body. Does nothing if the overlay is not present.
    pub fn show_info_for(&self, kind: OverlayKind) {
        let contents = match kind {
            OverlayKind::Trail => self
                .trail
                .borrow()
                .as_ref()
                .map(|t| (t.name.clone(), t.description.clone())),
            OverlayKind::ParkArea => self
                .park_area
                .borrow()
                .as_ref()
                .map(|p| (p.name.clone(), p.description.clone())),
        };

        match contents {
            Some((title, body)) => self.show_overlay_info(title, body),
            None => trace!("No {kind} to show info for"),
        }
    }

    fn update_slot<T: PartialEq>(
        &self,
        slot: &watch::Sender<Option<T>>,
        what: &str,
        update: impl FnOnce(&T) -> T,
    ) {
        let changed = slot.send_if_modified(|value| {
            let Some(current) = value.as_ref() else {
                trace!("Ignoring {what} update: overlay is not present");
                return false;
            };

            let updated = update(current);
            if updated == *current {
                trace!("Ignoring {what} update: value is unchanged");
                return false;
            }

            *value = Some(updated);
            true
        });

        if changed {
            debug!("Updated {what}");
            self.request_redraw();
        }
    }

    fn request_redraw(&self) {
        let messenger = self.messenger.read().clone();
        if let Some(messenger) = messenger {
            messenger.request_redraw();
        }
    }
}

impl Default for OverlayStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Weak;

    use super::*;
    use crate::geo::GeoPoint;
    use crate::seed::{sample_park_area, sample_trail};

    #[derive(Clone, Default)]
    struct RedrawCounter(Arc<AtomicUsize>);

    impl RedrawCounter {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl Messenger for RedrawCounter {
        fn request_redraw(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn store_with_counter() -> (OverlayStore, RedrawCounter) {
        let store = OverlayStore::new();
        let counter = RedrawCounter::default();
        store.set_messenger(Some(counter.clone()));
        (store, counter)
    }

    #[test]
    fn initialize_loads_samples() {
        let store = OverlayStore::new();

        let trail = store.trail().expect("trail is seeded");
        assert_eq!(trail.id, "trail_1");
        assert_eq!(trail.name, "Central Park Loop Trail");
        assert_eq!(trail.coordinates.len(), 5);
        assert_eq!(trail.coordinates[0], GeoPoint::new(40.768697, -73.981818));
        assert_eq!(trail.color.argb(), 0xFF2196F3);
        assert_eq!(trail.width, 10.0);

        let park = store.park_area().expect("park is seeded");
        assert_eq!(park.id, "park_1");
        assert_eq!(park.name, "Central Park");
        assert_eq!(park.coordinates.len(), 4);
        assert_eq!(park.fill_color.argb(), 0x3300FF00);
        assert_eq!(park.stroke_color.argb(), 0xFF00FF00);
        assert_eq!(park.stroke_width, 5.0);

        assert_eq!(store.dialog_state(), DialogState::default());
    }

    #[test]
    fn empty_store_has_nothing() {
        let store = OverlayStore::empty();
        assert!(store.trail().is_none());
        assert!(store.park_area().is_none());
        assert!(!store.dialog_state().visible);
    }

    #[test]
    fn trail_color_update_keeps_other_fields() {
        let store = OverlayStore::new();
        let before = store.trail().expect("trail");

        for (_, color) in crate::seed::PALETTE {
            store.update_trail_color(color);
            let after = store.trail().expect("trail");
            assert_eq!(after.color, color);
            assert_eq!(after.with_color(before.color), before);
        }

        store.update_trail_color(Color::from_argb(0x00000000));
        assert_eq!(store.trail().map(|t| t.color.argb()), Some(0));
    }

    #[test]
    fn park_updates_keep_other_fields() {
        let store = OverlayStore::new();
        let before = store.park_area().expect("park");

        store.update_park_fill_color(Color::from_argb(0x80F44336));
        let after = store.park_area().expect("park");
        assert_eq!(after.fill_color.argb(), 0x80F44336);
        assert_eq!(after.with_fill_color(before.fill_color), before);

        store.update_park_stroke_color(Color::PURPLE);
        store.update_park_stroke_width(7.5);
        let after = store.park_area().expect("park");
        assert_eq!(after.stroke_color, Color::PURPLE);
        assert_eq!(after.stroke_width, 7.5);
        assert_eq!(after.fill_color.argb(), 0x80F44336);
        assert_eq!(after.id, before.id);
        assert_eq!(after.coordinates, before.coordinates);

        assert_eq!(store.trail(), Some(sample_trail()));
    }

    #[test]
    fn updates_without_overlays_are_ignored() {
        let store = OverlayStore::empty();
        let counter = RedrawCounter::default();
        store.set_messenger(Some(counter.clone()));

        store.update_trail_color(Color::RED);
        store.update_trail_width(12.0);
        store.update_park_fill_color(Color::RED);
        store.update_park_stroke_color(Color::RED);
        store.update_park_stroke_width(3.0);
        store.show_info_for(OverlayKind::Trail);
        store.show_info_for(OverlayKind::ParkArea);

        assert!(store.trail().is_none());
        assert!(store.park_area().is_none());
        assert_eq!(store.dialog_state(), DialogState::default());
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn sequential_width_updates() {
        let store = OverlayStore::new();
        store.update_trail_width(8.0);
        store.update_trail_width(12.0);
        assert_eq!(store.trail().map(|t| t.width), Some(12.0));
    }

    #[test]
    fn widths_are_not_clamped() {
        let store = OverlayStore::new();
        store.update_trail_width(42.0);
        store.update_park_stroke_width(0.25);
        assert_eq!(store.trail().map(|t| t.width), Some(42.0));
        assert_eq!(store.park_area().map(|p| p.stroke_width), Some(0.25));
    }

    #[test]
    fn show_and_hide_dialog() {
        let store = OverlayStore::new();

        store.show_overlay_info("T", "B");
        assert_eq!(store.dialog_state(), DialogState::shown("T", "B"));

        store.hide_overlay_info();
        let hidden = store.dialog_state();
        assert!(!hidden.visible);
        assert_eq!(hidden.title, "T");
        assert_eq!(hidden.body, "B");

        store.show_overlay_info("X", "Y");
        assert_eq!(store.dialog_state(), DialogState::shown("X", "Y"));
    }

    #[test]
    fn show_replaces_visible_dialog() {
        let store = OverlayStore::new();
        store.show_overlay_info("first", "one");
        store.show_overlay_info("second", "two");
        assert_eq!(store.dialog_state(), DialogState::shown("second", "two"));
    }

    #[test]
    fn show_info_for_overlays() {
        let store = OverlayStore::new();

        store.show_info_for(OverlayKind::ParkArea);
        let park = sample_park_area();
        assert_eq!(
            store.dialog_state(),
            DialogState::shown(park.name, park.description)
        );

        store.show_info_for(OverlayKind::Trail);
        let trail = sample_trail();
        assert_eq!(
            store.dialog_state(),
            DialogState::shown(trail.name, trail.description)
        );
    }

    #[test]
    fn messenger_is_called_once_per_change() {
        let (store, counter) = store_with_counter();

        store.update_trail_width(12.0);
        assert_eq!(counter.count(), 1);

        store.update_trail_width(12.0);
        assert_eq!(counter.count(), 1);

        store.update_park_stroke_color(Color::from_argb(0xFF00FF00));
        assert_eq!(counter.count(), 1);

        store.show_overlay_info("T", "B");
        store.show_overlay_info("T", "B");
        assert_eq!(counter.count(), 2);

        store.hide_overlay_info();
        store.hide_overlay_info();
        assert_eq!(counter.count(), 3);

        store.set_messenger(None::<RedrawCounter>);
        store.update_trail_width(15.0);
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn messenger_sees_new_value() {
        struct Check {
            store: Arc<OverlayStore>,
            seen: Arc<parking_lot::Mutex<Vec<f32>>>,
        }

        impl Messenger for Check {
            fn request_redraw(&self) {
                if let Some(trail) = self.store.trail() {
                    self.seen.lock().push(trail.width);
                }
            }
        }

        let store = Arc::new(OverlayStore::new());
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        store.set_messenger(Some(Check {
            store: store.clone(),
            seen: seen.clone(),
        }));

        store.update_trail_width(6.0);
        store.update_trail_width(18.0);
        assert_eq!(*seen.lock(), vec![6.0, 18.0]);

        // Break the reference cycle.
        store.set_messenger(None::<Check>);
    }

    #[test]
    fn messenger_can_detach_itself() {
        struct OneShot {
            store: Weak<OverlayStore>,
            counter: RedrawCounter,
        }

        impl Messenger for OneShot {
            fn request_redraw(&self) {
                self.counter.request_redraw();
                if let Some(store) = self.store.upgrade() {
                    store.set_messenger(None::<OneShot>);
                }
            }
        }

        let store = Arc::new(OverlayStore::new());
        let counter = RedrawCounter::default();
        store.set_messenger(Some(OneShot {
            store: Arc::downgrade(&store),
            counter: counter.clone(),
        }));

        store.update_trail_width(6.0);
        assert_eq!(counter.count(), 1);

        store.update_trail_width(7.0);
        assert_eq!(counter.count(), 1);
        assert_eq!(store.trail().map(|t| t.width), Some(7.0));
    }

    #[test]
    fn messenger_can_update_store() {
        struct Follow {
            store: Weak<OverlayStore>,
        }

        impl Messenger for Follow {
            fn request_redraw(&self) {
                let Some(store) = self.store.upgrade() else {
                    return;
                };
                if let Some(trail) = store.trail() {
                    store.update_park_stroke_color(trail.color);
                }
            }
        }

        let store = Arc::new(OverlayStore::new());
        store.set_messenger(Some(Follow {
            store: Arc::downgrade(&store),
        }));

        store.update_trail_color(Color::ORANGE);
        assert_eq!(store.park_area().map(|p| p.stroke_color), Some(Color::ORANGE));
    }

    #[test]
    fn receivers_observe_changes() {
        let store = OverlayStore::new();
        let mut trail_rx = store.subscribe_trail();
        let mut dialog_rx = store.subscribe_dialog();
        assert!(!trail_rx.has_changed().expect("sender alive"));

        store.update_trail_color(Color::GREEN);
        tokio_test::block_on(trail_rx.changed()).expect("sender alive");
        assert_eq!(
            trail_rx.borrow_and_update().as_ref().map(|t| t.color),
            Some(Color::GREEN)
        );

        store.update_trail_color(Color::GREEN);
        assert!(!trail_rx.has_changed().expect("sender alive"));

        store.show_overlay_info("T", "B");
        tokio_test::block_on(dialog_rx.changed()).expect("sender alive");
        assert!(dialog_rx.borrow_and_update().visible);
    }

    #[test]
    fn receivers_skip_ignored_updates() {
        let store = OverlayStore::empty();
        let park_rx = store.subscribe_park_area();

        store.update_park_fill_color(Color::RED);
        assert!(!park_rx.has_changed().expect("sender alive"));
    }

    #[test]
    fn custom_seed() {
        let store = OverlayStore::with_seed(SeedData {
            trail: None,
            park_area: Some(sample_park_area()),
        });
        assert!(store.trail().is_none());
        assert_eq!(store.park_area(), Some(sample_park_area()));

        store.update_trail_color(Color::RED);
        assert!(store.trail().is_none());
    }
}
