//! Tag and attribute spellings consumed by downstream tooling; do not rename.
use crate::models::{Severity, MessageKind, StageKind};

pub mod element {
    pub const BUILD: &str = "msbuild";
    pub const PROJECT: &str = "project";
    pub const TARGET: &str = "target";
    pub const TASK: &str = "task";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const MESSAGE: &str = "message";
    pub const CUSTOM: &str = "custom";
    pub const FAILURE: &str = "failure";
    pub const DURATION: &str = "duration";
}

pub mod attribute {
    pub const NAME: &str = "name";
    pub const FILE: &str = "file";
    pub const START_TIME: &str = "startTime";
    pub const TIME_STAMP: &str = "timeStamp";
    pub const CODE: &str = "code";
    pub const LINE: &str = "line";
    pub const COLUMN: &str = "column";
    pub const IMPORTANCE: &str = "level";
    pub const SUBCATEGORY: &str = "category";
    pub const HELP_KEYWORD: &str = "help";
    pub const SUCCESS: &str = "success";
}

pub fn stage_element(kind: StageKind) -> &'static str {
    match kind {
        StageKind::Build => element::BUILD,
        StageKind::Project => element::PROJECT,
        StageKind::Target => element::TARGET,
        StageKind::Task => element::TASK,
    }
}

pub fn diagnostic_element(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => element::WARNING,
        Severity::Error => element::ERROR,
    }
}

pub fn message_element(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Message => element::MESSAGE,
        MessageKind::Custom => element::CUSTOM,
    }
}
