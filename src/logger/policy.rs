//! Decides, from the configured verbosity alone, which events are written
//! and which optional attributes and children they carry.
use crate::models::{Importance, StageKind, Verbosity};

/// Classes of events a verbosity level can switch on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventClass {
    Build,
    Project,
    Target,
    Task,
    Diagnostic,
    Message,
}

impl From<StageKind> for EventClass {
    fn from(kind: StageKind) -> Self {
        match kind {
            StageKind::Build => EventClass::Build,
            StageKind::Project => EventClass::Project,
            StageKind::Target => EventClass::Target,
            StageKind::Task => EventClass::Task,
        }
    }
}

use EventClass::*;

const QUIET: &[EventClass] = &[Build, Diagnostic];
const MINIMAL: &[EventClass] = &[Build, Diagnostic, Message, Project];
const NORMAL: &[EventClass] = &[Build, Diagnostic, Message, Project, Target];
const DETAILED: &[EventClass] = &[Build, Diagnostic, Message, Project, Target, Task];

fn enabled_classes(verbosity: Verbosity) -> &'static [EventClass] {
    match verbosity {
        Verbosity::Quiet => QUIET,
        Verbosity::Minimal => MINIMAL,
        Verbosity::Normal => NORMAL,
        Verbosity::Detailed | Verbosity::Diagnostic => DETAILED,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Policy {
    verbosity: Verbosity,
}

impl Policy {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn is_enabled(&self, class: EventClass) -> bool {
        enabled_classes(self.verbosity).contains(&class)
    }

    pub fn is_stage_enabled(&self, kind: StageKind) -> bool {
        self.is_enabled(kind.into())
    }

    /// Low importance needs at least detailed output, normal importance at
    /// least normal output; high importance only needs the message channel.
    pub fn is_message_enabled(&self, importance: Importance) -> bool {
        if !self.is_enabled(Message) {
            return false;
        }

        match importance {
            Importance::Low => self.verbosity >= Verbosity::Detailed,
            Importance::Normal => self.verbosity >= Verbosity::Normal,
            Importance::High => true,
        }
    }

    pub fn should_record_start_time(&self, is_root: bool) -> bool {
        is_root || self.is_diagnostic()
    }

    pub fn should_record_timestamp(&self) -> bool {
        self.is_diagnostic()
    }

    pub fn should_record_duration(&self, is_outermost: bool) -> bool {
        is_outermost || self.is_diagnostic()
    }

    fn is_diagnostic(&self) -> bool {
        self.verbosity == Verbosity::Diagnostic
    }
}
