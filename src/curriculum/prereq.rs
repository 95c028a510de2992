// src/curriculum/prereq.rs

use crate::types::CourseId;

/// Split a `requires` attribute into trimmed prerequisite ids.
///
/// A missing attribute means no prerequisites. Empty tokens are dropped, so
/// `"A,,B"`, `" , "` and `""` never produce an id that could lock a course.
/// Duplicates are dropped, first occurrence wins.
pub fn parse_prerequisites(attr: Option<&str>) -> Vec<CourseId> {
    let Some(attr) = attr else {
        return Vec::new();
    };

    let mut out: Vec<CourseId> = Vec::new();
    for token in attr.split(',') {
        let id = token.trim();
        if id.is_empty() || out.iter().any(|existing| existing == id) {
            continue;
        }
        out.push(id.to_string());
    }
    out
}
