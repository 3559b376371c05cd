//! Events are delivered by the build host to observers, one at a time and
//! in order, so each observer can render the build as it progresses.

use crate::models::{Diagnostic, Message, StageFinished, StageStarted};
use anyhow::Result;
use serde::Deserialize;

/// A single normalized build-lifecycle notification
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    StageStarted(StageStarted),
    StageFinished(StageFinished),
    Diagnostic(Diagnostic),
    Message(Message),
}

/// Observers watch the build so they can report on it
pub trait Observer {
    fn initialize(&mut self) -> Result<()>;
    fn handle(&mut self, event: &Event) -> Result<()>;
    fn shutdown(&mut self) -> Result<()>;
}

/// Dispatches events to every attached observer
pub struct EventSource {
    observers: Vec<Box<dyn Observer>>,
}

impl EventSource {
    pub fn new(observers: Vec<Box<dyn Observer>>) -> Self {
        Self { observers }
    }

    pub fn initialize(&mut self) -> Result<()> {
        for observer in self.observers.iter_mut() {
            observer.initialize()?;
        }

        Ok(())
    }

    pub fn dispatch(&mut self, event: &Event) -> Result<()> {
        for observer in self.observers.iter_mut() {
            observer.handle(event)?;
        }

        Ok(())
    }

    /// Every observer gets shut down even if an earlier one fails; the first
    /// failure is returned.
    pub fn shutdown(&mut self) -> Result<()> {
        let mut result = Ok(());
        for observer in self.observers.iter_mut() {
            let shutdown = observer.shutdown();
            if result.is_ok() {
                result = shutdown;
            }
        }

        result
    }
}
