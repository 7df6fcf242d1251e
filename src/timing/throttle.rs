use std::time::{Duration, Instant};

use super::DEFAULT_INTERVAL;

/// Lets at most one call through per `interval`.
///
/// The first call always passes. After [`Throttle::cancel`] the interval is
/// zero and every call passes until [`Throttle::set_interval`] restores one.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Returns true if a call at `now` may run, and records it
    pub fn try_fire_at(&mut self, now: Instant) -> bool {
        let ready = match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if ready {
            self.last = Some(now);
        }
        ready
    }

    pub fn try_fire(&mut self) -> bool {
        self.try_fire_at(Instant::now())
    }

    /// Stop throttling
    pub fn cancel(&mut self) {
        self.interval = Duration::ZERO;
    }

    pub fn is_cancelled(&self) -> bool {
        self.interval.is_zero()
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
