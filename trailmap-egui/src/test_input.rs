//! Synthetic frame input for driving widgets in tests.

use egui::{Event, Key, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};

/// Logical size of the test screen.
const SCREEN_SIZE: Vec2 = Vec2::new(800.0, 600.0);

/// A frame carrying `events`.
fn frame(events: Vec<Event>) -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN_SIZE)),
        events,
        ..Default::default()
    }
}

/// A frame without input.
pub(crate) fn idle() -> RawInput {
    frame(Vec::new())
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

/// Pointer moves to `pos` and the primary button goes down.
fn press(pos: Pos2) -> RawInput {
    frame(vec![Event::PointerMoved(pos), button(pos, true)])
}

/// Primary button goes up at `pos`.
fn release(pos: Pos2) -> RawInput {
    frame(vec![button(pos, false)])
}

/// Press and release at `pos`, one frame each.
pub(crate) fn click(pos: Pos2) -> [RawInput; 2] {
    [press(pos), release(pos)]
}

/// A single key press.
pub(crate) fn key(key: Key) -> RawInput {
    frame(vec![Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: Modifiers::NONE,
    }])
}
