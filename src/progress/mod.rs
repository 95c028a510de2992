// src/progress/mod.rs

//! Persisted progress: the completed set and the storage it lives in.

pub mod completed;
pub mod store;

pub use completed::CompletedSet;
pub use store::{is_usable_key, FileStorage, MemoryStorage, ProgressStore, Storage};
