//! Data models for the build events the logger consumes

pub mod verbosity;
pub mod stage;
pub mod message;
pub mod diagnostic;

pub use verbosity::{Verbosity, UnknownVerbosity};
pub use stage::{StageKind, StageStarted, StageFinished};
pub use message::{Message, MessageKind, Importance};
pub use diagnostic::{Diagnostic, Severity};
