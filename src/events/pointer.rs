use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::contains;

/// Reports mouse presses that land outside a region (e.g. to close a popup)
#[derive(Debug, Clone, Default)]
pub struct ClickOutside {
    region: Option<Rect>,
}

impl ClickOutside {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region the last render drew into; `None` while hidden
    pub fn set_region(&mut self, region: Option<Rect>) {
        self.region = region;
    }

    pub fn region(&self) -> Option<Rect> {
        self.region
    }

    /// True for a button press outside the region. Never fires without one.
    pub fn handle(&self, mouse: &MouseEvent) -> bool {
        let Some(region) = self.region else {
            return false;
        };
        matches!(mouse.kind, MouseEventKind::Down(_)) && !contains(region, mouse.column, mouse.row)
    }
}

/// Tracks whether the pointer is over a region
#[derive(Debug, Clone, Default)]
pub struct Hover {
    region: Option<Rect>,
    hovered: bool,
}

impl Hover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_region(&mut self, region: Option<Rect>) {
        self.region = region;
        if region.is_none() {
            self.hovered = false;
        }
    }

    /// Feed a mouse event. Returns true if the hovered state changed.
    pub fn handle(&mut self, mouse: &MouseEvent) -> bool {
        let Some(region) = self.region else {
            return false;
        };
        if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            return false;
        }
        let hovered = contains(region, mouse.column, mouse.row);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}
