use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Result of feeding a key to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// Key not handled here
    Ignored,
    /// Cursor moved, text unchanged
    Moved,
    /// Text changed
    Edited,
    /// User asked to commit the draft now
    Commit,
}

/// Check for escape key (Esc or Ctrl+[)
pub fn is_escape(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('[') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Single-line text buffer with a cursor (byte offset on a char boundary)
#[derive(Debug, Clone, Default)]
pub struct Editor {
    pub buffer: String,
    pub cursor: usize,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents and put the cursor at the end
    pub fn load(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditResult {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return EditResult::Ignored;
        }

        match key.code {
            KeyCode::Enter => EditResult::Commit,
            KeyCode::Char(c) => {
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                EditResult::Edited
            }
            KeyCode::Backspace => match self.prev_boundary() {
                Some(prev) => {
                    self.buffer.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    EditResult::Edited
                }
                None => EditResult::Ignored,
            },
            KeyCode::Delete => match self.next_boundary() {
                Some(next) => {
                    self.buffer.replace_range(self.cursor..next, "");
                    EditResult::Edited
                }
                None => EditResult::Ignored,
            },
            KeyCode::Left => match self.prev_boundary() {
                Some(prev) => {
                    self.cursor = prev;
                    EditResult::Moved
                }
                None => EditResult::Ignored,
            },
            KeyCode::Right => match self.next_boundary() {
                Some(next) => {
                    self.cursor = next;
                    EditResult::Moved
                }
                None => EditResult::Ignored,
            },
            KeyCode::Home => {
                self.cursor = 0;
                EditResult::Moved
            }
            KeyCode::End => {
                self.cursor = self.buffer.len();
                EditResult::Moved
            }
            _ => EditResult::Ignored,
        }
    }

    /// Display columns before the cursor
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(editor: &mut Editor, s: &str) {
        for c in s.chars() {
            editor.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut editor = Editor::new();
        type_str(&mut editor, "héllo");
        assert_eq!(editor.buffer, "héllo");

        assert_eq!(editor.handle_key(press(KeyCode::Backspace)), EditResult::Edited);
        assert_eq!(editor.buffer, "héll");
        assert_eq!(editor.cursor_column(), 4);
    }

    #[test]
    fn test_cursor_moves_over_multibyte() {
        let mut editor = Editor::new();
        editor.load("aé");
        editor.handle_key(press(KeyCode::Left));
        assert_eq!(editor.cursor, 1);
        editor.handle_key(press(KeyCode::Char('x')));
        assert_eq!(editor.buffer, "axé");
        assert_eq!(editor.handle_key(press(KeyCode::Delete)), EditResult::Edited);
        assert_eq!(editor.buffer, "ax");
        assert_eq!(editor.handle_key(press(KeyCode::Right)), EditResult::Ignored);
    }

    #[test]
    fn test_control_keys_ignored() {
        let mut editor = Editor::new();
        let ctrl_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(editor.handle_key(ctrl_z), EditResult::Ignored);
        assert!(editor.buffer.is_empty());
    }

    #[test]
    fn test_enter_commits() {
        let mut editor = Editor::new();
        assert_eq!(editor.handle_key(press(KeyCode::Enter)), EditResult::Commit);
    }

    #[test]
    fn test_is_escape() {
        assert!(is_escape(press(KeyCode::Esc)));
        assert!(is_escape(KeyEvent::new(KeyCode::Char('['), KeyModifiers::CONTROL)));
        assert!(!is_escape(press(KeyCode::Char('['))));
    }
}
