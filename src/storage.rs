//! Persistent key-value storage in a single JSON file.
//!
//! [`Storage`] is the file: a JSON object mapping keys to arbitrary values,
//! rewritten atomically on every change. [`Stored`] is a typed view of one
//! key that falls back to an initial value and never fails; problems are
//! logged and the in-memory value carries on.

pub mod store;
pub mod stored;

pub use store::Storage;
pub use stored::Stored;
