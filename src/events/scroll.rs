use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::contains;

/// Horizontal and vertical scroll offsets of a scrollable area.
///
/// Offsets stay within `content - viewport` on each axis. Wheel events are
/// only honoured when they land inside the region set by the last render.
#[derive(Debug, Clone)]
pub struct ScrollPosition {
    x: u16,
    y: u16,
    content: (u16, u16),
    region: Rect,
    step: u16,
}

impl ScrollPosition {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            content: (0, 0),
            region: Rect::default(),
            step: 1,
        }
    }

    pub fn with_step(mut self, step: u16) -> Self {
        self.step = step.max(1);
        self
    }

    /// Current offsets as (x, y)
    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Update content size and visible region, re-clamping the offsets
    pub fn set_extent(&mut self, content: (u16, u16), region: Rect) {
        self.content = content;
        self.region = region;
        self.clamp();
    }

    fn max_offset(&self) -> (u16, u16) {
        (
            self.content.0.saturating_sub(self.region.width),
            self.content.1.saturating_sub(self.region.height),
        )
    }

    fn clamp(&mut self) {
        let (max_x, max_y) = self.max_offset();
        self.x = self.x.min(max_x);
        self.y = self.y.min(max_y);
    }

    pub fn scroll_to(&mut self, x: u16, y: u16) {
        self.x = x;
        self.y = y;
        self.clamp();
    }

    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        let x = (self.x as i32 + dx).clamp(0, u16::MAX as i32) as u16;
        let y = (self.y as i32 + dy).clamp(0, u16::MAX as i32) as u16;
        self.scroll_to(x, y);
    }

    /// Feed a mouse event. Returns true if the position changed.
    pub fn handle(&mut self, mouse: &MouseEvent) -> bool {
        if !contains(self.region, mouse.column, mouse.row) {
            return false;
        }
        let step = self.step as i32;
        let before = self.position();
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(0, step),
            MouseEventKind::ScrollUp => self.scroll_by(0, -step),
            MouseEventKind::ScrollRight => self.scroll_by(step, 0),
            MouseEventKind::ScrollLeft => self.scroll_by(-step, 0),
            _ => return false,
        }
        self.position() != before
    }
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::new()
    }
}
