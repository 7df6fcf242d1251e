//! Property-based tests for the undo/redo timeline.
//!
//! 1. Distinct sets build the past in order and leave the future empty
//! 2. Repeating the present is a no-op
//! 3. Undo then redo restores the exact prior state
//! 4. Undo/redo at the boundary are no-ops
//! 5. Any effective set empties the future
//! 6. Clear always yields a fresh timeline
//! 7. past + [present] + future is preserved by undo/redo

use proptest::prelude::*;
use tui_hooks::{Action, History, Timeline};

// ── Strategies ──────────────────────────────────────────────────────────

fn action_strategy() -> impl Strategy<Value = Action<u8>> {
    prop_oneof![
        Just(Action::Undo),
        Just(Action::Redo),
        (0u8..16).prop_map(Action::Set),
        (0u8..16).prop_map(Action::Clear),
    ]
}

fn reachable(initial: u8, actions: Vec<Action<u8>>) -> History<u8> {
    let mut history = History::new(initial);
    for action in actions {
        history.dispatch(action);
    }
    history
}

fn flatten(timeline: &Timeline<u8>) -> Vec<u8> {
    timeline.iter().copied().collect()
}

proptest! {
    #[test]
    fn distinct_sets_build_past(values in proptest::collection::vec(1u8..=255, 0..40)) {
        // strip consecutive duplicates so every set is effective
        let mut distinct: Vec<u8> = Vec::new();
        let mut last = 0u8;
        for v in values {
            if v != last {
                distinct.push(v);
                last = v;
            }
        }

        let mut history = History::new(0u8);
        for v in &distinct {
            history.set(*v);
        }

        let mut expected_past = vec![0u8];
        expected_past.extend(distinct.iter().copied());
        let present = expected_past.pop().unwrap();

        prop_assert_eq!(*history.value(), present);
        prop_assert_eq!(history.past(), expected_past.as_slice());
        prop_assert!(history.future().is_empty());
    }

    #[test]
    fn repeated_set_is_noop(
        initial in 0u8..16,
        actions in proptest::collection::vec(action_strategy(), 0..40),
    ) {
        let mut history = reachable(initial, actions);
        let before = history.timeline().clone();
        let present = *history.value();
        history.set(present);
        prop_assert_eq!(history.timeline(), &before);
    }

    #[test]
    fn undo_redo_roundtrip(
        initial in 0u8..16,
        actions in proptest::collection::vec(action_strategy(), 0..40),
    ) {
        let mut history = reachable(initial, actions);
        prop_assume!(history.can_undo());
        let before = history.timeline().clone();
        history.undo();
        history.redo();
        prop_assert_eq!(history.timeline(), &before);
    }

    #[test]
    fn boundary_moves_are_noops(
        initial in 0u8..16,
        actions in proptest::collection::vec(action_strategy(), 0..40),
    ) {
        let mut history = reachable(initial, actions);
        let before = history.timeline().clone();
        if !history.can_undo() {
            history.undo();
            prop_assert_eq!(history.timeline(), &before);
        }
        if !history.can_redo() {
            history.redo();
            prop_assert_eq!(history.timeline(), &before);
        }
    }

    #[test]
    fn effective_set_empties_future(
        initial in 0u8..16,
        actions in proptest::collection::vec(action_strategy(), 0..40),
        value in 0u8..16,
    ) {
        let mut history = reachable(initial, actions);
        prop_assume!(value != *history.value());
        let flags = history.set(value);
        prop_assert!(history.future().is_empty());
        prop_assert!(!flags.can_redo);
        prop_assert!(flags.can_undo);
    }

    #[test]
    fn clear_yields_fresh_timeline(
        initial in 0u8..16,
        actions in proptest::collection::vec(action_strategy(), 0..40),
        value in 0u8..16,
    ) {
        let mut history = reachable(initial, actions);
        history.clear(value);
        prop_assert_eq!(history.timeline(), &Timeline::new(value));
    }

    #[test]
    fn undo_redo_preserve_sequence(
        initial in 0u8..16,
        sets in proptest::collection::vec(0u8..16, 0..20),
        moves in proptest::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut history = History::new(initial);
        for v in sets {
            history.set(v);
        }
        let full = flatten(history.timeline());
        for undo in moves {
            if undo { history.undo(); } else { history.redo(); }
            prop_assert_eq!(flatten(history.timeline()), full.clone());
            prop_assert_eq!(history.can_undo(), !history.past().is_empty());
            prop_assert_eq!(history.can_redo(), !history.future().is_empty());
        }
    }
}
