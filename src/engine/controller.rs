// src/engine/controller.rs

//! Shell around the pure core: executes render, notify and persist commands.

use tracing::debug;

use crate::curriculum::Curriculum;
use crate::engine::core::CoreController;
use crate::engine::handlers::{CoreCommand, CoreStep};
use crate::engine::UiEvent;
use crate::errors::Result;
use crate::progress::{CompletedSet, ProgressStore};
use crate::view::Renderer;

/// Drives a [`CoreController`] with real storage and a renderer.
///
/// Storage failures never abort a session; renderer failures do.
pub struct Controller<R: Renderer> {
    core: CoreController,
    store: ProgressStore,
    renderer: R,
}

impl<R: Renderer> Controller<R> {
    /// Load the completed set from `store` and build the controller.
    ///
    /// Nothing is rendered until [`Controller::start`] is called.
    pub fn new(curriculum: Curriculum, store: ProgressStore, renderer: R) -> Self {
        let completed = store.load();
        Self {
            core: CoreController::new(curriculum, completed),
            store,
            renderer,
        }
    }

    /// Initial recompute + render + persist.
    pub fn start(&mut self) -> Result<()> {
        self.dispatch(UiEvent::Refresh).map(|_| ())
    }

    pub fn click(&mut self, course: &str) -> Result<CoreStep> {
        self.dispatch(UiEvent::Clicked {
            course: course.to_string(),
        })
    }

    pub fn reset(&mut self) -> Result<CoreStep> {
        self.dispatch(UiEvent::Reset)
    }

    /// Feed one event to the core and execute the resulting commands in
    /// order.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<CoreStep> {
        debug!(?event, "dispatching ui event");
        let step = self.core.step(event);

        for command in step.commands.iter() {
            match command {
                CoreCommand::Render(view) => self.renderer.render(view)?,
                CoreCommand::Notify(notification) => self.renderer.notify(notification)?,
                CoreCommand::Persist(completed) => {
                    self.store.save(completed);
                }
            }
        }

        Ok(step)
    }

    pub fn completed(&self) -> &CompletedSet {
        self.core.completed()
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
