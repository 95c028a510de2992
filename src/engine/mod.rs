// src/engine/mod.rs

//! State controller for the curriculum.
//!
//! The pure state transitions live in [`handlers`] and are driven by the
//! synchronous [`core::CoreController`]. The [`controller::Controller`] shell
//! owns storage and a renderer and carries out the commands the core emits.

use crate::types::CourseId;

/// Events flowing into the controller from the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Re-derive every course state (initial load, explicit refresh).
    Refresh,
    /// The user clicked a course.
    Clicked { course: CourseId },
    /// Forget all progress.
    Reset,
}

pub mod controller;
pub mod core;
pub mod handlers;

pub use self::controller::Controller;
pub use self::core::CoreController;
pub use self::handlers::{
    missing_prerequisites, recompute, toggle, CoreCommand, CoreStep, MissingPrerequisite,
    Recomputed,
};
