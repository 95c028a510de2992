// src/config/model.rs

use serde::Deserialize;

use crate::types::StorageMode;

/// Default storage key for the completed set.
pub const DEFAULT_STORAGE_KEY: &str = "ramosAprobados";

/// Default storage directory, relative to the curriculum file.
pub const DEFAULT_STORAGE_DIR: &str = ".ramos";

/// Curriculum as read from a TOML file, before validation.
///
/// ```toml
/// [storage]
/// mode = "file"
/// key = "ramosAprobados"
///
/// [[course]]
/// id = "A"
/// name = "Anatomía"
/// semester = 1
///
/// [[course]]
/// id = "B"
/// name = "Bioquímica"
/// requires = "A"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawCurriculumFile {
    #[serde(default)]
    pub storage: StorageSection,

    /// Courses in declaration order. Order is preserved for rendering.
    #[serde(default)]
    pub course: Vec<CourseConfig>,
}

/// Validated curriculum. Only constructible through `TryFrom<RawCurriculumFile>`.
#[derive(Debug, Clone)]
pub struct CurriculumFile {
    pub storage: StorageSection,
    pub course: Vec<CourseConfig>,
}

impl CurriculumFile {
    pub(crate) fn new_unchecked(storage: StorageSection, course: Vec<CourseConfig>) -> Self {
        Self { storage, course }
    }
}

/// `[storage]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    #[serde(default)]
    pub mode: StorageMode,

    /// Directory holding `<key>.json` files. Relative paths are resolved
    /// against the curriculum file's directory.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Key under which the completed set is stored.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_dir() -> String {
    DEFAULT_STORAGE_DIR.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            mode: StorageMode::default(),
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

/// One `[[course]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    /// Unique course id.
    pub id: String,

    /// Display name; the id is shown when absent.
    #[serde(default)]
    pub name: Option<String>,

    /// Semester, used for grouping in rendered output only.
    #[serde(default)]
    pub semester: Option<u32>,

    /// Comma-separated prerequisite ids, e.g. `"A, B"`.
    #[serde(default)]
    pub requires: Option<String>,
}

impl CourseConfig {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.id,
        }
    }
}
