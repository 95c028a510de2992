// src/view/text.rs

use std::io::Write;

use crate::errors::Result;
use crate::view::{CourseView, Notification, Renderer, ViewModel};

/// Plain-text renderer.
///
/// ```text
/// Semester 1
///   [x] A  Anatomía
///   [ ] B  Bioquímica
///   [#] C  Fisiología
/// ```
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

fn marker(course: &CourseView) -> &'static str {
    if course.locked {
        "[#]"
    } else if course.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &ViewModel) -> Result<()> {
        let id_width = view.courses.iter().map(|c| c.id.chars().count()).max().unwrap_or(0);
        let mut current_group: Option<Option<u32>> = None;

        for course in view.courses.iter() {
            if current_group != Some(course.semester) {
                match course.semester {
                    Some(n) => writeln!(self.out, "Semester {n}")?,
                    None => writeln!(self.out, "Other")?,
                }
                current_group = Some(course.semester);
            }
            writeln!(
                self.out,
                "  {} {:<width$}  {}",
                marker(course),
                course.id,
                course.name,
                width = id_width
            )?;
        }

        writeln!(
            self.out,
            "{}/{} completed, {} locked",
            view.completed_count(),
            view.courses.len(),
            view.locked_count()
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn notify(&mut self, notification: &Notification) -> Result<()> {
        match notification {
            Notification::Blocked { course, missing } => {
                writeln!(self.out, "⛔ {course} is locked. Complete first:")?;
                for name in missing {
                    writeln!(self.out, "  • {name}")?;
                }
            }
            Notification::UnknownCourse(id) => {
                writeln!(self.out, "no course with id '{id}'")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
