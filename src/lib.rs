//! State-management utilities for terminal user interfaces.
//!
//! The main piece is [`History`], an undo/redo timeline of values. The other
//! modules are small owned helpers that a ratatui component keeps next to its
//! own state: timers ([`timing`]), toggles and previous-value tracking
//! ([`state`]), crossterm event hooks ([`events`]), JSON-file storage
//! ([`storage`]), background work with status tracking ([`task`]), the
//! terminal title ([`title`]) and named theme variables ([`theme`]).

pub mod config;
pub mod error;
pub mod events;
pub mod history;
pub mod state;
pub mod storage;
pub mod task;
pub mod theme;
pub mod timing;
pub mod title;

pub use error::{ConfigError, StorageError, TaskError};
pub use history::{Action, History, HistoryFlags, Shared, Timeline};
