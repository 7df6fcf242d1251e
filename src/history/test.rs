use std::collections::VecDeque;

use super::*;

fn deque(values: &[&'static str]) -> VecDeque<&'static str> {
    values.iter().copied().collect()
}

/// Helper to snapshot a history as (past, present, future) for comparisons
fn parts<T: Clone>(history: &History<T>) -> (Vec<T>, T, Vec<T>) {
    (
        history.past().to_vec(),
        history.value().clone(),
        history.future().iter().cloned().collect(),
    )
}

// === Construction tests ===

#[test]
fn test_new_history_is_empty() {
    let history = History::new("A");
    assert_eq!(*history.value(), "A");
    assert!(history.past().is_empty());
    assert!(history.future().is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

// === Set tests ===

#[test]
fn test_set_sequence_builds_past() {
    let mut history = History::new(0);
    for v in 1..=4 {
        history.set(v);
    }
    assert_eq!(*history.value(), 4);
    assert_eq!(history.past(), &[0, 1, 2, 3]);
    assert!(history.future().is_empty());
}

#[test]
fn test_set_same_value_is_noop() {
    let mut history = History::new("A");
    history.set("B");
    history.set("C");
    history.undo();
    let before = parts(&history);

    let flags = history.set("B");
    assert_eq!(parts(&history), before);
    assert!(flags.can_redo, "future must survive a repeated set");
}

#[test]
fn test_set_returns_fresh_flags() {
    let mut history = History::new(1);
    let flags = history.set(2);
    assert_eq!(flags, HistoryFlags { can_undo: true, can_redo: false });
    assert_eq!(history.flags(), flags);
}

// === Undo/redo tests ===

#[test]
fn test_undo_moves_present_to_future() {
    let mut history = History::new("A");
    history.set("B");
    history.set("C");

    let flags = history.undo();
    assert_eq!(*history.value(), "B");
    assert_eq!(history.past(), &["A"]);
    assert_eq!(*history.future(), deque(&["C"]));
    assert!(flags.can_undo && flags.can_redo);

    history.undo();
    assert_eq!(*history.value(), "A");
    assert_eq!(*history.future(), deque(&["B", "C"]));
    assert!(!history.can_undo());
}

#[test]
fn test_redo_takes_front_of_future() {
    let mut history = History::new("A");
    history.set("B");
    history.set("C");
    history.undo();
    history.undo();

    history.redo();
    assert_eq!(*history.value(), "B");
    assert_eq!(history.past(), &["A"]);
    assert_eq!(*history.future(), deque(&["C"]));

    history.redo();
    assert_eq!(*history.value(), "C");
    assert!(!history.can_redo());
}

#[test]
fn test_undo_on_empty_past_is_noop() {
    let mut history = History::new(7);
    let flags = history.undo();
    assert_eq!(*history.value(), 7);
    assert_eq!(flags, HistoryFlags::default());
}

#[test]
fn test_redo_on_empty_future_is_noop() {
    let mut history = History::new(7);
    history.set(8);
    let before = parts(&history);
    history.redo();
    assert_eq!(parts(&history), before);
}

#[test]
fn test_undo_redo_roundtrip() {
    let mut history = History::new('a');
    history.set('b');
    history.set('c');
    history.undo();
    let before = parts(&history);

    history.undo();
    history.redo();
    assert_eq!(parts(&history), before);
}

#[test]
fn test_set_after_undo_discards_future() {
    let mut history = History::new("A");
    history.set("B");
    assert_eq!(parts(&history), (vec!["A"], "B", vec![]));
    history.set("C");
    assert_eq!(parts(&history), (vec!["A", "B"], "C", vec![]));
    history.undo();
    assert_eq!(parts(&history), (vec!["A"], "B", vec!["C"]));
    history.set("D");
    assert_eq!(parts(&history), (vec!["A", "B"], "D", vec![]));
    assert!(!history.can_redo());
}

// === Clear tests ===

#[test]
fn test_clear_from_any_state() {
    let mut history = History::new("A");
    history.set("B");
    history.set("C");
    history.undo();

    let flags = history.clear("X");
    assert_eq!(parts(&history), (vec![], "X", vec![]));
    assert_eq!(flags, HistoryFlags::default());
}

#[test]
fn test_reset_returns_to_initial() {
    let mut history = History::new(String::from("start"));
    history.set("one".to_string());
    history.set("two".to_string());

    history.reset();
    assert_eq!(history.value(), "start");
    assert!(history.past().is_empty());
}

// === Timeline tests ===

#[test]
fn test_timeline_iter_oldest_to_newest() {
    let mut history = History::new(1);
    history.set(2);
    history.set(3);
    history.set(4);
    history.undo();
    history.undo();

    let timeline = history.timeline();
    assert_eq!(timeline.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(timeline.cursor(), 1);
    assert_eq!(timeline.len(), 4);
}

#[test]
fn test_reduce_is_pure() {
    let start = Timeline::new("A");
    let next = reduce(start.clone(), Action::Set("B"));
    assert_eq!(start.present, "A");
    assert_eq!(next.present, "B");
    assert_eq!(next.past, vec!["A"]);
}

#[test]
fn test_apply_reports_change() {
    let mut timeline = Timeline::new(1);
    assert!(!timeline.apply(Action::Undo));
    assert!(!timeline.apply(Action::Set(1)));
    assert!(timeline.apply(Action::Set(2)));
    assert!(timeline.apply(Action::Clear(1)));
    assert!(!timeline.apply(Action::Clear(1)));
}

#[test]
fn test_peek() {
    let mut history = History::new("A");
    assert_eq!(history.peek_undo(), None);
    history.set("B");
    assert_eq!(history.peek_undo(), Some(&"A"));
    history.undo();
    assert_eq!(history.peek_redo(), Some(&"B"));
}

// === Shared (identity equality) tests ===

#[test]
fn test_shared_equal_contents_still_recorded() {
    let first = Shared::new(vec![1, 2]);
    let mut history = History::new(first.clone());

    history.set(first.clone());
    assert!(!history.can_undo(), "same allocation is a no-op");

    history.set(Shared::new(vec![1, 2]));
    assert!(history.can_undo(), "new allocation with equal contents is a new value");
    assert_eq!(**history.value(), vec![1, 2]);
}

#[test]
fn test_structural_equality_by_default() {
    let mut history = History::new(vec![1, 2]);
    history.set(vec![1, 2]);
    assert!(!history.can_undo());
}
