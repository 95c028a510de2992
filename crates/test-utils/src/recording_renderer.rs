use std::sync::{Arc, Mutex};

use ramos::errors::Result;
use ramos::view::{Notification, Renderer, ViewModel};

/// Something a [`RecordingRenderer`] was asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    View(ViewModel),
    Notice(Notification),
}

/// A renderer that:
/// - records every view and notification it receives
/// - shares the record with the test through an `Arc<Mutex<..>>`.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    log: Arc<Mutex<Vec<Rendered>>>,
}

impl RecordingRenderer {
    pub fn new(log: Arc<Mutex<Vec<Rendered>>>) -> Self {
        Self { log }
    }

    pub fn log(&self) -> Arc<Mutex<Vec<Rendered>>> {
        Arc::clone(&self.log)
    }

    pub fn entries(&self) -> Vec<Rendered> {
        self.log.lock().unwrap().clone()
    }

    pub fn last_view(&self) -> Option<ViewModel> {
        self.entries().into_iter().rev().find_map(|r| match r {
            Rendered::View(v) => Some(v),
            Rendered::Notice(_) => None,
        })
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.entries()
            .into_iter()
            .filter_map(|r| match r {
                Rendered::Notice(n) => Some(n),
                Rendered::View(_) => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &ViewModel) -> Result<()> {
        self.log.lock().unwrap().push(Rendered::View(view.clone()));
        Ok(())
    }

    fn notify(&mut self, notification: &Notification) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(Rendered::Notice(notification.clone()));
        Ok(())
    }
}
