// src/types.rs

use serde::Deserialize;

/// Canonical course identifier type used throughout the crate.
pub type CourseId = String;

/// Where the completed set is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// One JSON file per storage key under the storage directory.
    #[default]
    File,
    /// Kept in memory only (lost when the process exits).
    Memory,
}
