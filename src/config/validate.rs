// src/config/validate.rs

use std::collections::HashSet;
use std::fmt;

use tracing::warn;

use crate::config::model::{CurriculumFile, RawCurriculumFile};
use crate::curriculum::parse_prerequisites;
use crate::errors::{RamosError, Result};
use crate::progress::is_usable_key;

impl TryFrom<RawCurriculumFile> for CurriculumFile {
    type Error = RamosError;

    fn try_from(raw: RawCurriculumFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_curriculum(&raw)?;
        let cfg = CurriculumFile::new_unchecked(raw.storage, raw.course);
        for warning in prerequisite_warnings(&cfg) {
            warn!(%warning, "curriculum warning");
        }
        Ok(cfg)
    }
}

fn validate_raw_curriculum(cfg: &RawCurriculumFile) -> Result<()> {
    ensure_has_courses(cfg)?;
    validate_storage(cfg)?;
    validate_course_ids(cfg)?;
    Ok(())
}

fn ensure_has_courses(cfg: &RawCurriculumFile) -> Result<()> {
    if cfg.course.is_empty() {
        return Err(RamosError::ConfigError(
            "curriculum must contain at least one [[course]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_storage(cfg: &RawCurriculumFile) -> Result<()> {
    let key = cfg.storage.key.as_str();
    if key.trim().is_empty() {
        return Err(RamosError::ConfigError(
            "[storage].key must not be empty".to_string(),
        ));
    }
    if !is_usable_key(key) {
        return Err(RamosError::ConfigError(format!(
            "[storage].key '{}' must be usable as a file name (no '/', '\\', '.' or '..')",
            key
        )));
    }
    Ok(())
}

fn validate_course_ids(cfg: &RawCurriculumFile) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for (idx, course) in cfg.course.iter().enumerate() {
        let id = course.id.as_str();
        if id.trim().is_empty() {
            return Err(RamosError::ConfigError(format!(
                "course #{} has an empty id",
                idx + 1
            )));
        }
        if id != id.trim() {
            return Err(RamosError::ConfigError(format!(
                "course id '{}' has leading or trailing whitespace",
                id
            )));
        }
        if id.contains(',') {
            return Err(RamosError::ConfigError(format!(
                "course id '{}' must not contain ','",
                id
            )));
        }
        if !seen.insert(id) {
            return Err(RamosError::ConfigError(format!(
                "duplicate course id '{}'",
                id
            )));
        }
    }
    Ok(())
}

/// Non-fatal problems in prerequisite declarations.
///
/// Cycles are deliberately not reported. Courses on a cycle simply stay
/// locked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrerequisiteWarning {
    /// `course` requires an id that names no course; it can never unlock.
    UnknownPrerequisite { course: String, prerequisite: String },
    /// `course` lists itself; it can never unlock.
    SelfPrerequisite { course: String },
}

impl fmt::Display for PrerequisiteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrerequisiteWarning::UnknownPrerequisite { course, prerequisite } => write!(
                f,
                "course '{}' requires unknown course '{}' and will stay locked",
                course, prerequisite
            ),
            PrerequisiteWarning::SelfPrerequisite { course } => write!(
                f,
                "course '{}' requires itself and will stay locked",
                course
            ),
        }
    }
}

/// Collect prerequisite warnings in course declaration order.
pub fn prerequisite_warnings(cfg: &CurriculumFile) -> Vec<PrerequisiteWarning> {
    let known: HashSet<&str> = cfg.course.iter().map(|c| c.id.as_str()).collect();
    let mut warnings = Vec::new();

    for course in cfg.course.iter() {
        for prereq in parse_prerequisites(course.requires.as_deref()) {
            if prereq == course.id {
                warnings.push(PrerequisiteWarning::SelfPrerequisite {
                    course: course.id.clone(),
                });
            } else if !known.contains(prereq.as_str()) {
                warnings.push(PrerequisiteWarning::UnknownPrerequisite {
                    course: course.id.clone(),
                    prerequisite: prereq,
                });
            }
        }
    }

    warnings
}
