// src/progress/completed.rs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::types::CourseId;

/// Set of completed course ids.
///
/// Serializes as a JSON array of strings. Ordering is sorted, which keeps
/// the stored value stable across saves; readers must not rely on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedSet {
    ids: BTreeSet<CourseId>,
}

impl CompletedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns `true` if the id was not already present.
    pub fn insert(&mut self, id: impl Into<CourseId>) -> bool {
        self.ids.insert(id.into())
    }

    /// Returns `true` if the id was present.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(|s| s.as_str())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl<S: Into<CourseId>> FromIterator<S> for CompletedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
