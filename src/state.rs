//! Small owned state cells: toggles, previous-value tracking, compare-based
//! memoisation, post-commit callbacks and redraw requests.

pub mod callback;
pub mod memo;
pub mod previous;
pub mod toggle;
pub mod update;

pub use callback::CallbackState;
pub use memo::MemoCompare;
pub use previous::Previous;
pub use toggle::Toggle;
pub use update::UpdateTrigger;
