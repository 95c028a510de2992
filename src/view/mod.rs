// src/view/mod.rs

//! Declarative view of the curriculum state.
//!
//! The engine never draws anything itself. It emits a [`ViewModel`] and
//! [`Notification`]s, and a [`Renderer`] turns them into output.

pub mod text;

use crate::errors::Result;
use crate::types::CourseId;

pub use text::TextRenderer;

/// Visual state of one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseView {
    pub id: CourseId,
    pub name: String,
    pub semester: Option<u32>,
    pub locked: bool,
    /// Never `true` while `locked` is `true`.
    pub completed: bool,
}

/// Visual state of every course, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub courses: Vec<CourseView>,
}

impl ViewModel {
    pub fn get(&self, id: &str) -> Option<&CourseView> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn locked_count(&self) -> usize {
        self.courses.iter().filter(|c| c.locked).count()
    }

    pub fn completed_count(&self) -> usize {
        self.courses.iter().filter(|c| c.completed).count()
    }
}

/// A message the user must acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A locked course was clicked. `missing` holds the display names of the
    /// unmet prerequisites (raw ids for unknown ones).
    Blocked { course: String, missing: Vec<String> },
    /// A click named no course in the curriculum.
    UnknownCourse(CourseId),
}

/// Applies view updates to some output.
pub trait Renderer {
    fn render(&mut self, view: &ViewModel) -> Result<()>;
    fn notify(&mut self, notification: &Notification) -> Result<()>;
}
