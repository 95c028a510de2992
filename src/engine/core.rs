// src/engine/core.rs

//! Pure core state machine.
//!
//! [`CoreController`] owns the curriculum and the completed set, consumes
//! [`UiEvent`]s and returns [`CoreStep`]s. It has no storage and no output,
//! so it can be unit tested directly.

use crate::curriculum::Curriculum;
use crate::engine::handlers::{handle_click, handle_refresh, handle_reset, CoreCommand, CoreStep};
use crate::engine::UiEvent;
use crate::progress::CompletedSet;
use crate::view::ViewModel;

#[derive(Debug)]
pub struct CoreController {
    curriculum: Curriculum,
    completed: CompletedSet,
    /// Last rendered view; empty until the first refresh.
    view: ViewModel,
}

impl CoreController {
    pub fn new(curriculum: Curriculum, completed: CompletedSet) -> Self {
        Self {
            curriculum,
            completed,
            view: ViewModel::default(),
        }
    }

    pub fn completed(&self) -> &CompletedSet {
        &self.completed
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Handle a single event, updating state and returning the commands for
    /// the shell.
    pub fn step(&mut self, event: UiEvent) -> CoreStep {
        let completed = std::mem::take(&mut self.completed);
        let (completed, step) = match event {
            UiEvent::Refresh => handle_refresh(&self.curriculum, completed),
            UiEvent::Clicked { course } => handle_click(&self.curriculum, completed, &course),
            UiEvent::Reset => handle_reset(&self.curriculum, completed),
        };
        self.completed = completed;

        for command in step.commands.iter() {
            if let CoreCommand::Render(view) = command {
                self.view = view.clone();
            }
        }

        step
    }
}
