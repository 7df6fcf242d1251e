use std::collections::VecDeque;
use std::mem;

/// A value together with the values it replaced and the values undone from it.
///
/// Reading `past`, then `present`, then `future` front to back gives the whole
/// timeline from oldest to newest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<T> {
    /// Previously committed values, oldest first
    pub past: Vec<T>,
    pub present: T,
    /// Undone values, most recently undone first
    pub future: VecDeque<T>,
}

/// A transition applied to a [`Timeline`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<T> {
    /// Step back to the last past value (no-op when there is none)
    Undo,
    /// Step forward to the first future value (no-op when there is none)
    Redo,
    /// Commit a new present; ignored when it equals the current one
    Set(T),
    /// Drop all history and start over from the given value
    Clear(T),
}

impl<T> Action<T> {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Undo => "undo",
            Action::Redo => "redo",
            Action::Set(_) => "set",
            Action::Clear(_) => "clear",
        }
    }
}

impl<T> Timeline<T> {
    pub fn new(present: T) -> Self {
        Self {
            past: Vec::new(),
            present,
            future: VecDeque::new(),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of values in the whole timeline, the present included
    pub fn len(&self) -> usize {
        self.past.len() + 1 + self.future.len()
    }

    /// Position of the present in [`Timeline::iter`]
    pub fn cursor(&self) -> usize {
        self.past.len()
    }

    /// All values from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.past
            .iter()
            .chain(std::iter::once(&self.present))
            .chain(self.future.iter())
    }
}

impl<T: PartialEq> Timeline<T> {
    /// Apply `action` in place. Returns true if the timeline changed.
    pub fn apply(&mut self, action: Action<T>) -> bool {
        match action {
            Action::Undo => match self.past.pop() {
                Some(previous) => {
                    let old = mem::replace(&mut self.present, previous);
                    self.future.push_front(old);
                    true
                }
                None => false,
            },
            Action::Redo => match self.future.pop_front() {
                Some(next) => {
                    let old = mem::replace(&mut self.present, next);
                    self.past.push(old);
                    true
                }
                None => false,
            },
            Action::Set(new_present) => {
                if new_present == self.present {
                    return false;
                }
                let old = mem::replace(&mut self.present, new_present);
                self.past.push(old);
                self.future.clear();
                true
            }
            Action::Clear(initial) => {
                let changed = self.can_undo() || self.can_redo() || initial != self.present;
                self.past.clear();
                self.future.clear();
                self.present = initial;
                changed
            }
        }
    }

    /// Consume the timeline and return the one that follows `action`
    pub fn reduce(mut self, action: Action<T>) -> Self {
        self.apply(action);
        self
    }
}

/// Reducer form of [`Timeline::reduce`]
pub fn reduce<T: PartialEq>(timeline: Timeline<T>, action: Action<T>) -> Timeline<T> {
    timeline.reduce(action)
}

impl<T: Default> Default for Timeline<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
