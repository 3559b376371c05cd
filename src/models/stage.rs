//! Build-lifecycle scopes and their start/finish notifications
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Containment levels of a build, outermost first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Build,
    Project,
    Target,
    Task,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Build => write!(f, "build"),
            Self::Project => write!(f, "project"),
            Self::Target => write!(f, "target"),
            Self::Task => write!(f, "task"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StageStarted {
    pub kind: StageKind,
    /// Opaque label: target names for a project, the target or task name otherwise
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub file: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StageFinished {
    pub kind: StageKind,
    #[serde(default = "succeeded_default")]
    pub succeeded: bool,
    pub timestamp: DateTime<Utc>,
}

fn succeeded_default() -> bool {
    true
}
