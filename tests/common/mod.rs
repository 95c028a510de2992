#![allow(dead_code, unused_imports)]

use std::path::Path;
use std::sync::Arc;

pub use ramos_test_utils::builders;
pub use ramos_test_utils::init_tracing;
pub use ramos_test_utils::recording_renderer::{RecordingRenderer, Rendered};

use ramos::fs::mock::MockFileSystem;
use ramos::progress::{FileStorage, ProgressStore};

/// Directory the mock storage writes under.
pub const STORE_DIR: &str = "/malla/.ramos";

/// A progress store backed by `fs` at `STORE_DIR/<key>.json`.
pub fn mock_store(fs: &MockFileSystem, key: &str) -> ProgressStore {
    let storage = FileStorage::with_fs(Arc::new(fs.clone()), STORE_DIR);
    ProgressStore::new(Box::new(storage), key)
}

pub fn stored_path(key: &str) -> String {
    Path::new(STORE_DIR)
        .join(format!("{key}.json"))
        .to_string_lossy()
        .into_owned()
}
