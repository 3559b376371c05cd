//! Failures surfaced by the XML logger to its host
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("XmlLogger: An exception was thrown while creating output file {}. Did you specify a valid filename?", .path.display())]
    SinkCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed writing to the XML log: {0}")]
    Io(#[from] io::Error),

    #[error("Stage finished with no matching stage start")]
    StackUnderflow,

    #[error("Logger is {state}, expected it to be open")]
    NotOpen { state: &'static str },

    #[error("Logger has already been initialized")]
    AlreadyInitialized,

    #[error("{count} stage(s) were still open at shutdown and were closed without a finish event")]
    UnclosedStages { count: usize },

    #[error("Attribute '{name}' written after its element's start tag was closed")]
    MisplacedAttribute { name: &'static str },
}

pub type Result<T> = std::result::Result<T, LoggerError>;
