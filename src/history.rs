//! Undo/redo history over a linear timeline of values.
//!
//! A [`Timeline`] is the pure data: everything before the present, the
//! present, and everything that was undone. [`History`] is the handle a
//! component owns; it applies [`Action`]s through the reducer and keeps the
//! `can_undo`/`can_redo` flags current after every change.

pub mod handle;
pub mod shared;
pub mod timeline;

pub use handle::{History, HistoryFlags};
pub use shared::Shared;
pub use timeline::{reduce, Action, Timeline};

#[cfg(test)]
mod test;
