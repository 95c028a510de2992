// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{CurriculumFile, RawCurriculumFile};
use crate::errors::Result;

/// Load a curriculum file and return the raw, unvalidated model.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawCurriculumFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let raw: RawCurriculumFile = toml::from_str(&contents)?;
    Ok(raw)
}

/// Load a curriculum file from path and validate it.
///
/// Validation rejects empty/duplicate/comma-bearing ids and an empty storage
/// key. Unknown prerequisite ids are not errors; see
/// [`crate::config::prerequisite_warnings`].
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<CurriculumFile> {
    let raw = load_from_path(&path)?;
    CurriculumFile::try_from(raw)
}

/// Parse and validate curriculum TOML held in memory.
pub fn parse_and_validate(contents: &str) -> Result<CurriculumFile> {
    let raw: RawCurriculumFile = toml::from_str(contents)?;
    CurriculumFile::try_from(raw)
}

/// `Malla.toml` in the current working directory.
pub fn default_curriculum_path() -> PathBuf {
    PathBuf::from("Malla.toml")
}
