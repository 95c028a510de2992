// src/config/mod.rs

//! Curriculum file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a curriculum file from disk (`loader.rs`).
//! - Validate basic invariants like unique course ids (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_curriculum_path, load_and_validate, load_from_path, parse_and_validate};
pub use model::{CourseConfig, CurriculumFile, RawCurriculumFile, StorageSection};
pub use validate::{prerequisite_warnings, PrerequisiteWarning};
