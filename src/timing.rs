//! Time-based call gates driven by [`Instant`](std::time::Instant)s.
//!
//! Both gates take the current instant as an argument (`*_at` methods) so
//! they can be driven by an event loop tick and tested without sleeping.
//! The argument-free variants read `Instant::now()`.

pub mod debounce;
pub mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;

use std::time::Duration;

/// Delay used by both gates when none is configured
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(30);

#[cfg(test)]
mod test;
