//! Serializes a stream of build-lifecycle events into a single XML document
//! whose nesting mirrors the build: build > project > target > task.

pub mod error;
pub mod events;
pub mod logger;
pub mod models;
pub mod parser;

#[cfg(test)]
mod testing;

pub use error::LoggerError;
pub use events::{Event, EventSource, Observer};
pub use logger::{LoggerConfig, XmlLogger};
pub use models::Verbosity;
