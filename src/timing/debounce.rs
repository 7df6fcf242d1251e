use std::time::{Duration, Instant};

use super::DEFAULT_INTERVAL;

/// Fires once after calls have stopped arriving for `delay`.
///
/// Every [`Debounce::trigger_at`] pushes the deadline back. The owner polls
/// from its event loop and runs the deferred work when `poll_at` says so.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    armed: bool,
    /// `None` while armed means the deadline lies beyond what `Instant` can hold
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed: false,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// (Re)arm the gate as of `now`
    pub fn trigger_at(&mut self, now: Instant) {
        self.armed = true;
        self.deadline = now.checked_add(self.delay);
    }

    pub fn trigger(&mut self) {
        self.trigger_at(Instant::now());
    }

    /// Returns true exactly once when the deadline has passed
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if self.armed && now >= deadline => {
                self.cancel();
                true
            }
            _ => false,
        }
    }

    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Drop a pending call without firing it
    pub fn cancel(&mut self) {
        self.armed = false;
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.armed
    }

    /// Time left until the pending call fires, if any
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        if !self.armed {
            return None;
        }
        Some(match self.deadline {
            Some(deadline) => deadline.saturating_duration_since(now),
            None => Duration::MAX,
        })
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
