//! Trailmap holds the state behind a map screen showing a hiking trail and a park
//! boundary.
//!
//! The central type is [`OverlayStore`]. It owns the current [`Trail`], the
//! current [`ParkArea`] and the [`DialogState`] of the overlay info dialog, and it
//! is the only place where these values change. Presentation code reads snapshots
//! or subscribes to changes, and forwards user edits back through the store's
//! update methods:
//!
//! ```ignore
//! use trailmap::{Color, OverlayStore};
//!
//! let store = OverlayStore::new();
//! store.update_trail_color(Color::from_argb(0xFFF44336));
//! assert_eq!(store.trail().map(|t| t.color), Some(Color::from_argb(0xFFF44336)));
//! ```
//!
//! Rendering is left to a separate crate (see `trailmap-egui`). The store only
//! notifies it through a [`Messenger`] when something needs to be redrawn.

pub mod color;
#[cfg(feature = "serde")]
pub mod config;
pub mod dialog;
pub mod error;
pub mod geo;
pub mod messenger;
pub mod overlay;
pub mod seed;
pub mod store;

pub use color::Color;
pub use dialog::DialogState;
pub use error::{ColorParseError, OverlayError};
pub use geo::GeoPoint;
pub use messenger::Messenger;
pub use overlay::{OverlayKind, ParkArea, Trail};
pub use seed::{NamedColor, SeedData};
pub use store::OverlayStore;
