// src/curriculum/graph.rs

use std::collections::HashMap;

use crate::config::model::CurriculumFile;
use crate::curriculum::prereq::parse_prerequisites;
use crate::progress::CompletedSet;
use crate::types::CourseId;

/// A single course node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    /// Display text shown to the user.
    pub name: String,
    pub semester: Option<u32>,
    /// Trimmed prerequisite ids, in declaration order.
    pub prerequisites: Vec<CourseId>,
}

/// In-memory course graph keyed by id, preserving declaration order.
///
/// Prerequisite ids are kept verbatim even when they name no course; such
/// prerequisites are never satisfiable (see [`Curriculum::is_satisfied`]).
#[derive(Debug, Clone)]
pub struct Curriculum {
    courses: Vec<Course>,
    index: HashMap<CourseId, usize>,
    dependents: HashMap<CourseId, Vec<CourseId>>,
}

impl Curriculum {
    /// Build a curriculum from a validated [`CurriculumFile`].
    ///
    /// Assumes course ids are unique.
    pub fn from_config(cfg: &CurriculumFile) -> Self {
        let courses: Vec<Course> = cfg
            .course
            .iter()
            .map(|c| Course {
                id: c.id.clone(),
                name: c.display_name().to_string(),
                semester: c.semester,
                prerequisites: parse_prerequisites(c.requires.as_deref()),
            })
            .collect();

        let index = courses
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        let mut dependents: HashMap<CourseId, Vec<CourseId>> = HashMap::new();
        for course in courses.iter() {
            for prereq in course.prerequisites.iter() {
                dependents
                    .entry(prereq.clone())
                    .or_default()
                    .push(course.id.clone());
            }
        }

        Self {
            courses,
            index,
            dependents,
        }
    }

    /// All courses in declaration order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&i| &self.courses[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Display text for `id`, falling back to the raw id for unknown courses.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|c| c.name.as_str()).unwrap_or(id)
    }

    /// Courses that list `id` among their prerequisites.
    pub fn dependents_of(&self, id: &str) -> &[CourseId] {
        self.dependents
            .get(id)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    /// A prerequisite is satisfied only if it names a known course that is
    /// in the completed set.
    pub fn is_satisfied(&self, prerequisite: &str, completed: &CompletedSet) -> bool {
        self.contains(prerequisite) && completed.contains(prerequisite)
    }

    /// Prerequisites of `course` that are not satisfied, in declaration order.
    pub fn unmet_prerequisites<'a>(
        &self,
        course: &'a Course,
        completed: &CompletedSet,
    ) -> Vec<&'a str> {
        course
            .prerequisites
            .iter()
            .filter(|p| !self.is_satisfied(p, completed))
            .map(|p| p.as_str())
            .collect()
    }

    /// A course is locked if at least one prerequisite is unmet.
    pub fn is_locked(&self, course: &Course, completed: &CompletedSet) -> bool {
        course
            .prerequisites
            .iter()
            .any(|p| !self.is_satisfied(p, completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate;

    fn curriculum() -> Curriculum {
        let cfg = parse_and_validate(
            r#"
[[course]]
id = "A"
name = "Anatomía"

[[course]]
id = "B"
requires = "A, ghost"

[[course]]
id = "C"
name = ""
requires = "A"
"#,
        )
        .unwrap();
        Curriculum::from_config(&cfg)
    }

    #[test]
    fn keeps_declaration_order_and_names() {
        let c = curriculum();
        let ids: Vec<&str> = c.courses().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(c.display_name("A"), "Anatomía");
        assert_eq!(c.display_name("C"), "C");
        assert_eq!(c.display_name("ghost"), "ghost");
    }

    #[test]
    fn dependents_are_indexed() {
        let c = curriculum();
        assert_eq!(c.dependents_of("A"), ["B".to_string(), "C".to_string()]);
        assert!(c.dependents_of("C").is_empty());
    }

    #[test]
    fn unknown_prerequisite_is_never_satisfied() {
        let c = curriculum();
        let completed: CompletedSet = ["A", "ghost"].into_iter().collect();
        let b = c.get("B").unwrap();
        assert!(c.is_locked(b, &completed));
        assert_eq!(c.unmet_prerequisites(b, &completed), vec!["ghost"]);
        assert!(!c.is_locked(c.get("C").unwrap(), &completed));
    }
}
