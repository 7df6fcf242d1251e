use std::collections::VecDeque;

use tracing::trace;

use super::timeline::{Action, Timeline};

/// Whether undo/redo are currently possible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryFlags {
    pub can_undo: bool,
    pub can_redo: bool,
}

impl HistoryFlags {
    fn of<T>(timeline: &Timeline<T>) -> Self {
        Self {
            can_undo: timeline.can_undo(),
            can_redo: timeline.can_redo(),
        }
    }
}

/// Owned undo/redo handle for one piece of state.
///
/// Every mutating call goes through [`History::dispatch`], which recomputes
/// the flags and hands them back so callers never read stale ones.
#[derive(Debug, Clone)]
pub struct History<T> {
    timeline: Timeline<T>,
    initial: T,
    flags: HistoryFlags,
}

impl<T: Clone + PartialEq> History<T> {
    pub fn new(initial: T) -> Self {
        Self {
            timeline: Timeline::new(initial.clone()),
            initial,
            flags: HistoryFlags::default(),
        }
    }

    /// Apply an action and return the refreshed flags
    pub fn dispatch(&mut self, action: Action<T>) -> HistoryFlags {
        let name = action.name();
        let changed = self.timeline.apply(action);
        self.flags = HistoryFlags::of(&self.timeline);
        trace!(
            action = name,
            changed,
            past = self.timeline.past.len(),
            future = self.timeline.future.len(),
            "history dispatch"
        );
        self.flags
    }

    /// Commit a new value (clears redo history unless it equals the present)
    pub fn set(&mut self, value: T) -> HistoryFlags {
        self.dispatch(Action::Set(value))
    }

    pub fn undo(&mut self) -> HistoryFlags {
        self.dispatch(Action::Undo)
    }

    pub fn redo(&mut self) -> HistoryFlags {
        self.dispatch(Action::Redo)
    }

    /// Drop all history and make `value` the present
    pub fn clear(&mut self, value: T) -> HistoryFlags {
        self.dispatch(Action::Clear(value))
    }

    /// Clear back to the value this history was created with
    pub fn reset(&mut self) -> HistoryFlags {
        let initial = self.initial.clone();
        self.clear(initial)
    }
}

impl<T> History<T> {
    /// The present value
    pub fn value(&self) -> &T {
        &self.timeline.present
    }

    pub fn initial(&self) -> &T {
        &self.initial
    }

    pub fn flags(&self) -> HistoryFlags {
        self.flags
    }

    pub fn can_undo(&self) -> bool {
        self.flags.can_undo
    }

    pub fn can_redo(&self) -> bool {
        self.flags.can_redo
    }

    pub fn timeline(&self) -> &Timeline<T> {
        &self.timeline
    }

    /// Past values, oldest first
    pub fn past(&self) -> &[T] {
        &self.timeline.past
    }

    /// Undone values, most recently undone first
    pub fn future(&self) -> &VecDeque<T> {
        &self.timeline.future
    }

    /// Peek at the value an undo would restore
    pub fn peek_undo(&self) -> Option<&T> {
        self.timeline.past.last()
    }

    /// Peek at the value a redo would restore
    pub fn peek_redo(&self) -> Option<&T> {
        self.timeline.future.front()
    }

    pub fn into_timeline(self) -> Timeline<T> {
        self.timeline
    }
}

impl<T: Clone + PartialEq + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
