// src/fs/mock.rs

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory filesystem for tests.
///
/// Clones share the same files. `set_unavailable(true)` makes every
/// operation fail, which stands in for storage that is full or forbidden.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let mut files = self.files.lock().unwrap_or_else(|e| e.into_inner());
        files.insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Current contents of a file as UTF-8, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let files = self.files.lock().unwrap_or_else(|e| e.into_inner());
        files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self, path: &Path) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(anyhow!("storage unavailable: {:?}", path));
        }
        Ok(())
    }
}

impl FileSystem for MockFileSystem {
    fn read_optional(&self, path: &Path) -> Result<Option<String>> {
        self.check_available(path)?;
        let files = self.files.lock().unwrap_or_else(|e| e.into_inner());
        match files.get(path) {
            Some(content) => String::from_utf8(content.clone())
                .map(Some)
                .map_err(|e| anyhow!("Invalid UTF-8: {}", e)),
            None => Ok(None),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.check_available(path)?;
        self.add_file(path, contents);
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<()> {
        self.check_available(path)?;
        let mut files = self.files.lock().unwrap_or_else(|e| e.into_inner());
        files.remove(path);
        Ok(())
    }
}
