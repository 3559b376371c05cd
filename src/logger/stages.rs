//! Tracks which stages are open so their durations can be reported on finish
use chrono::{DateTime, Duration, Utc};

use crate::error::{LoggerError, Result};
use crate::models::StageKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageFrame {
    pub kind: StageKind,
    pub start_time: DateTime<Utc>,
}

/// Result of closing the innermost open stage
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosedStage {
    pub kind: StageKind,
    pub duration: Duration,
    pub is_outermost: bool,
}

#[derive(Debug, Default)]
pub struct StageTracker {
    frames: Vec<StageFrame>,
}

impl StageTracker {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push(&mut self, kind: StageKind, start_time: DateTime<Utc>) {
        self.frames.push(StageFrame { kind, start_time });
    }

    /// Balanced start/finish delivery is the event source's contract, so an
    /// empty stack here is a protocol violation rather than bad input.
    pub fn pop(&mut self, finish_time: DateTime<Utc>) -> Result<ClosedStage> {
        let frame = self.frames.pop().ok_or(LoggerError::StackUnderflow)?;

        Ok(ClosedStage {
            kind: frame.kind,
            duration: finish_time - frame.start_time,
            is_outermost: self.frames.is_empty(),
        })
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
