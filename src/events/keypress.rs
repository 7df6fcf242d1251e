use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Tracks whether one particular key is currently held down.
///
/// Release events only arrive when the terminal has keyboard enhancement
/// enabled; without it a key stays "pressed" until [`KeyPress::reset`].
#[derive(Debug, Clone)]
pub struct KeyPress {
    target: KeyCode,
    pressed: bool,
}

impl KeyPress {
    pub fn new(target: KeyCode) -> Self {
        Self { target, pressed: false }
    }

    /// Feed a key event. Returns true if the pressed state changed.
    pub fn handle(&mut self, key: &KeyEvent) -> bool {
        if key.code != self.target {
            return false;
        }
        let pressed = match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => true,
            KeyEventKind::Release => false,
        };
        let changed = pressed != self.pressed;
        self.pressed = pressed;
        changed
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn reset(&mut self) {
        self.pressed = false;
    }
}
