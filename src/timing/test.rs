use std::time::{Duration, Instant};

use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// === Debounce tests ===

#[test]
fn test_debounce_fires_after_delay() {
    let t0 = Instant::now();
    let mut gate = Debounce::new(ms(30));
    gate.trigger_at(t0);

    assert!(!gate.poll_at(t0 + ms(10)));
    assert!(gate.poll_at(t0 + ms(30)));
    // only once
    assert!(!gate.poll_at(t0 + ms(60)));
}

#[test]
fn test_debounce_retrigger_pushes_deadline() {
    let t0 = Instant::now();
    let mut gate = Debounce::new(ms(30));
    gate.trigger_at(t0);
    gate.trigger_at(t0 + ms(20));

    assert!(!gate.poll_at(t0 + ms(40)));
    assert!(gate.poll_at(t0 + ms(50)));
}

#[test]
fn test_debounce_cancel() {
    let t0 = Instant::now();
    let mut gate = Debounce::default();
    gate.trigger_at(t0);
    assert!(gate.is_pending());

    gate.cancel();
    assert!(!gate.is_pending());
    assert!(!gate.poll_at(t0 + ms(1000)));
}

#[test]
fn test_debounce_remaining() {
    let t0 = Instant::now();
    let mut gate = Debounce::new(ms(30));
    assert_eq!(gate.remaining_at(t0), None);
    gate.trigger_at(t0);
    assert_eq!(gate.remaining_at(t0 + ms(10)), Some(ms(20)));
    assert_eq!(gate.remaining_at(t0 + ms(90)), Some(Duration::ZERO));
}

#[test]
fn test_untriggered_debounce_never_fires() {
    let mut gate = Debounce::new(ms(0));
    assert!(!gate.poll());
}

#[test]
fn test_debounce_huge_delay_never_fires() {
    let t0 = Instant::now();
    let mut gate = Debounce::new(Duration::MAX);
    gate.trigger_at(t0);

    assert!(gate.is_pending());
    assert!(!gate.poll_at(t0 + ms(1_000_000)));
    assert_eq!(gate.remaining_at(t0), Some(Duration::MAX));

    gate.cancel();
    assert!(!gate.is_pending());
    assert_eq!(gate.remaining_at(t0), None);
}

// === Throttle tests ===

#[test]
fn test_throttle_first_call_passes() {
    let mut gate = Throttle::new(ms(30));
    assert!(gate.try_fire_at(Instant::now()));
}

#[test]
fn test_throttle_limits_rate() {
    let t0 = Instant::now();
    let mut gate = Throttle::new(ms(30));

    assert!(gate.try_fire_at(t0));
    assert!(!gate.try_fire_at(t0 + ms(10)));
    assert!(!gate.try_fire_at(t0 + ms(29)));
    assert!(gate.try_fire_at(t0 + ms(30)));
    assert!(!gate.try_fire_at(t0 + ms(45)));
    assert!(gate.try_fire_at(t0 + ms(60)));
}

#[test]
fn test_throttle_cancel_lets_everything_through() {
    let t0 = Instant::now();
    let mut gate = Throttle::default();
    assert!(gate.try_fire_at(t0));

    gate.cancel();
    assert!(gate.is_cancelled());
    assert!(gate.try_fire_at(t0));
    assert!(gate.try_fire_at(t0 + ms(1)));

    gate.set_interval(ms(30));
    assert!(!gate.try_fire_at(t0 + ms(2)));
}
