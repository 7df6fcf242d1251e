//! Hooks over crossterm input events.
//!
//! Each tracker is fed events by the owner's event loop and keeps just
//! enough state to answer one question: is this key held, did the click
//! land outside that panel, how far has this list scrolled, is this widget
//! on screen.

pub mod keypress;
pub mod listener;
pub mod pointer;
pub mod scroll;
pub mod visibility;

pub use keypress::KeyPress;
pub use listener::{EventKind, ListenerId, Listeners, Phase};
pub use pointer::{ClickOutside, Hover};
pub use scroll::ScrollPosition;
pub use visibility::OnScreen;

use ratatui::layout::Rect;

/// Whether the cell at (`column`, `row`) lies inside `area`
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
