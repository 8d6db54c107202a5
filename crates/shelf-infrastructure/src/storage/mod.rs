//! Storage layer for atomic whole-file snapshots.

mod atomic_json;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
