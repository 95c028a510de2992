#![allow(dead_code)]

use ramos::config::{CourseConfig, CurriculumFile, RawCurriculumFile, StorageSection};
use ramos::curriculum::Curriculum;
use ramos::types::StorageMode;

/// Builder for `CurriculumFile` to simplify test setup.
pub struct CurriculumBuilder {
    raw: RawCurriculumFile,
}

impl CurriculumBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawCurriculumFile {
                storage: StorageSection::default(),
                course: Vec::new(),
            },
        }
    }

    pub fn with_course(mut self, course: CourseConfig) -> Self {
        self.raw.course.push(course);
        self
    }

    pub fn with_storage_key(mut self, key: &str) -> Self {
        self.raw.storage.key = key.to_string();
        self
    }

    pub fn with_storage_mode(mut self, mode: StorageMode) -> Self {
        self.raw.storage.mode = mode;
        self
    }

    pub fn build_raw(self) -> RawCurriculumFile {
        self.raw
    }

    pub fn build(self) -> CurriculumFile {
        CurriculumFile::try_from(self.raw).expect("Failed to build valid curriculum from builder")
    }

    pub fn build_curriculum(self) -> Curriculum {
        Curriculum::from_config(&self.build())
    }
}

impl Default for CurriculumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `CourseConfig`.
pub struct CourseBuilder {
    course: CourseConfig,
}

impl CourseBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            course: CourseConfig {
                id: id.to_string(),
                name: None,
                semester: None,
                requires: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.course.name = Some(name.to_string());
        self
    }

    pub fn semester(mut self, semester: u32) -> Self {
        self.course.semester = Some(semester);
        self
    }

    /// Set the raw `requires` attribute verbatim.
    pub fn requires_raw(mut self, attr: &str) -> Self {
        self.course.requires = Some(attr.to_string());
        self
    }

    /// Append one prerequisite id to the comma-separated attribute.
    pub fn requires(mut self, dep: &str) -> Self {
        self.course.requires = Some(match self.course.requires.take() {
            Some(existing) if !existing.is_empty() => format!("{existing},{dep}"),
            _ => dep.to_string(),
        });
        self
    }

    pub fn build(self) -> CourseConfig {
        self.course
    }
}
