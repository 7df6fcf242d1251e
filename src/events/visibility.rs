use ratatui::layout::Rect;

/// Tracks whether a widget's area intersects the viewport.
///
/// The margin grows (positive) or shrinks (negative) the viewport on every
/// side before testing, so a widget can count as visible a few cells early.
#[derive(Debug, Clone, Default)]
pub struct OnScreen {
    margin: i16,
    intersecting: bool,
}

impl OnScreen {
    pub fn new(margin: i16) -> Self {
        Self { margin, intersecting: false }
    }

    /// Recompute visibility. Returns `Some(visible)` only when it changed.
    pub fn observe(&mut self, target: Rect, viewport: Rect) -> Option<bool> {
        let visible = intersects(target, expand(viewport, self.margin));
        if visible == self.intersecting {
            return None;
        }
        self.intersecting = visible;
        Some(visible)
    }

    pub fn is_intersecting(&self) -> bool {
        self.intersecting
    }
}

/// Grow or shrink `area` by `margin` cells on each side, in signed space
fn expand(area: Rect, margin: i16) -> (i32, i32, i32, i32) {
    let m = margin as i32;
    let left = area.x as i32 - m;
    let top = area.y as i32 - m;
    let right = area.right() as i32 + m;
    let bottom = area.bottom() as i32 + m;
    (left, top, right, bottom)
}

fn intersects(target: Rect, (left, top, right, bottom): (i32, i32, i32, i32)) -> bool {
    if target.width == 0 || target.height == 0 || right <= left || bottom <= top {
        return false;
    }
    (target.x as i32) < right
        && (target.right() as i32) > left
        && (target.y as i32) < bottom
        && (target.bottom() as i32) > top
}
