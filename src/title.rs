use std::io::{self, Write};

use crossterm::{queue, terminal::SetTitle};

/// Terminal window title, written once per change
#[derive(Debug, Clone)]
pub struct Title {
    text: String,
    applied: bool,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            applied: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Change the text; the next [`Title::apply`] writes it
    pub fn set(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.applied = false;
        }
    }

    /// Emit the title escape sequence unless it is already current.
    /// Returns whether anything was written.
    pub fn apply<W: Write>(&mut self, out: &mut W) -> io::Result<bool> {
        if self.applied {
            return Ok(false);
        }
        queue!(out, SetTitle(&self.text))?;
        out.flush()?;
        self.applied = true;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_written_once() {
        let mut title = Title::new("notes");
        let mut out = Vec::new();

        assert!(title.apply(&mut out).unwrap());
        let written = String::from_utf8(out.clone()).unwrap();
        assert!(written.contains("notes"));

        assert!(!title.apply(&mut out).unwrap());
        assert_eq!(String::from_utf8(out.clone()).unwrap(), written);
    }

    #[test]
    fn test_title_rewritten_after_change() {
        let mut title = Title::new("a");
        let mut out = Vec::new();
        title.apply(&mut out).unwrap();

        title.set("a");
        assert!(!title.apply(&mut out).unwrap());
        title.set("b");
        assert!(title.apply(&mut out).unwrap());
        assert_eq!(title.text(), "b");
    }
}
