//! Writes build events into a single XML document whose nesting mirrors the
//! build: the root `msbuild` element holds projects, which hold targets,
//! which hold tasks. Messages, warnings and errors land inside whichever
//! stage is open when they arrive.
//!
//! Which events make it into the document, and which timing details they
//! carry, is decided by the configured verbosity.

mod format;
mod names;
mod policy;
mod stages;
mod writer;

pub use format::{format_duration, AttributeValue, TIMESTAMP_FORMAT};
pub use policy::{EventClass, Policy};
pub use stages::{ClosedStage, StageFrame, StageTracker};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, trace, warn};

use crate::error::{LoggerError, Result};
use crate::events::{Event, Observer};
use crate::models::{Diagnostic, Message, StageKind, StageFinished, StageStarted, Verbosity};
use crate::parser::extract_code;
use names::{attribute, element};
use writer::XmlWriter;

/// Code whose messages may carry raw markup fragments
const RAW_MARKUP_CODE: &str = "Properties";

pub type Sink = Box<dyn Write>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoggerConfig {
    /// Destination file; standard output when absent
    pub output: Option<PathBuf>,
    pub verbosity: Verbosity,
}

enum State {
    Unstarted,
    Open(Session),
    Closed,
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::Unstarted => "not initialized",
            State::Open(_) => "open",
            State::Closed => "shut down",
        }
    }
}

/// Single-use XML logger: initialize once, feed events, shut down once.
pub struct XmlLogger {
    config: LoggerConfig,
    policy: Policy,
    state: State,
}

impl XmlLogger {
    pub fn new(config: LoggerConfig) -> Self {
        let policy = Policy::new(config.verbosity);
        Self { config, policy, state: State::Unstarted }
    }

    /// Opens the configured destination and starts the document
    pub fn initialize(&mut self) -> Result<()> {
        if !matches!(self.state, State::Unstarted) {
            return Err(LoggerError::AlreadyInitialized);
        }

        let sink = open_sink(self.config.output.as_deref())?;
        self.initialize_with(sink)
    }

    /// Starts the document on a sink supplied by the host
    pub fn initialize_with(&mut self, sink: Sink) -> Result<()> {
        if !matches!(self.state, State::Unstarted) {
            return Err(LoggerError::AlreadyInitialized);
        }

        let mut writer = XmlWriter::new(sink);
        writer.write_prolog()?;
        writer.open_element(element::BUILD)?;
        writer.flush()?;

        debug!("XML log opened at verbosity {}", self.config.verbosity);
        self.state = State::Open(Session { writer, stages: StageTracker::new(), nested_builds: 0 });
        Ok(())
    }

    pub fn log(&mut self, event: &Event) -> Result<()> {
        let session = match &mut self.state {
            State::Open(session) => session,
            other => return Err(LoggerError::NotOpen { state: other.name() }),
        };

        if session.writer.is_finished() {
            warn!("Dropping event received after the build finished: {:?}", event);
            return Ok(());
        }

        match event {
            Event::StageStarted(ev) => session.stage_started(&self.policy, ev),
            Event::StageFinished(ev) => session.stage_finished(&self.policy, ev),
            Event::Diagnostic(ev) => session.diagnostic(&self.policy, ev),
            Event::Message(ev) => session.message(&self.policy, ev),
        }
    }

    /// Closes the document. Stages still open are force-closed so the output
    /// stays well-formed, but that is reported as an error.
    pub fn shutdown(&mut self) -> Result<()> {
        let session = match std::mem::replace(&mut self.state, State::Closed) {
            State::Open(session) => session,
            other => {
                let state = other.name();
                self.state = other;
                return Err(LoggerError::NotOpen { state });
            }
        };

        let unclosed = session.stages.depth();
        let (forced, _) = session.writer.finish()?;
        debug!("XML log closed, {} element(s) closed at shutdown", forced);

        if unclosed > 0 {
            error!("{} stage(s) never received a finish event", unclosed);
            return Err(LoggerError::UnclosedStages { count: unclosed });
        }

        Ok(())
    }
}

impl Observer for XmlLogger {
    fn initialize(&mut self) -> anyhow::Result<()> {
        Ok(XmlLogger::initialize(self)?)
    }

    fn handle(&mut self, event: &Event) -> anyhow::Result<()> {
        Ok(self.log(event)?)
    }

    fn shutdown(&mut self) -> anyhow::Result<()> {
        Ok(XmlLogger::shutdown(self)?)
    }
}

struct Session {
    writer: XmlWriter<Sink>,
    stages: StageTracker,
    /// Build starts ignored because a build was already open
    nested_builds: usize,
}

impl Session {
    fn stage_started(&mut self, policy: &Policy, ev: &StageStarted) -> Result<()> {
        if !policy.is_stage_enabled(ev.kind) {
            trace!("Skipping {} start at verbosity {}", ev.kind, policy.verbosity());
            return Ok(());
        }

        let is_root = ev.kind == StageKind::Build;

        // Only the outermost build owns the root element
        if is_root && !self.stages.is_empty() {
            warn!("Ignoring build started while {} stage(s) are open", self.stages.depth());
            self.nested_builds += 1;
            return Ok(());
        }

        // The build reuses the root element opened at initialization
        let attributes_writable = if is_root {
            self.writer.depth() == 1 && self.writer.start_tag_open()
        } else {
            self.writer.open_element(names::stage_element(ev.kind))?;
            true
        };

        if attributes_writable {
            let file = full_path(ev.file.as_deref());
            self.writer.write_attribute(attribute::NAME, ev.name.as_str())?;
            self.writer.write_attribute(attribute::FILE, file.as_deref())?;

            if policy.should_record_start_time(is_root) {
                self.writer.write_attribute(attribute::START_TIME, ev.timestamp)?;
            }
        } else {
            warn!("Build started after output was written to the root element; its attributes are dropped");
        }

        self.stages.push(ev.kind, ev.timestamp);
        self.writer.flush()
    }

    fn stage_finished(&mut self, policy: &Policy, ev: &StageFinished) -> Result<()> {
        if !policy.is_stage_enabled(ev.kind) {
            trace!("Skipping {} finish at verbosity {}", ev.kind, policy.verbosity());
            return Ok(());
        }

        if ev.kind == StageKind::Build && self.nested_builds > 0 {
            self.nested_builds -= 1;
            return Ok(());
        }

        let closed = self.stages.pop(ev.timestamp)?;
        if closed.kind != ev.kind {
            warn!("Received {} finish while {} was the innermost open stage", ev.kind, closed.kind);
        }

        if !ev.succeeded {
            self.writer.open_element(element::FAILURE)?;
            self.writer.write_attribute(attribute::SUCCESS, false)?;
            self.writer.close_element()?;
        }

        if policy.should_record_duration(closed.is_outermost) {
            self.writer.open_element(element::DURATION)?;
            self.writer.write_text(&format_duration(closed.duration))?;
            self.writer.close_element()?;
        }

        self.writer.close_element()?;
        self.writer.flush()
    }

    fn diagnostic(&mut self, policy: &Policy, ev: &Diagnostic) -> Result<()> {
        let (message, code) = extract_code(&ev.message, ev.code.as_deref());
        let file = full_path(ev.file.as_deref());

        self.writer.open_element(names::diagnostic_element(ev.severity))?;
        self.writer.write_attribute(attribute::CODE, code)?;
        self.writer.write_attribute(attribute::FILE, file.as_deref())?;
        self.writer.write_attribute(attribute::LINE, ev.line)?;
        self.writer.write_attribute(attribute::COLUMN, ev.column)?;
        self.writer.write_attribute(attribute::SUBCATEGORY, ev.subcategory.as_deref())?;
        self.writer.write_attribute(attribute::HELP_KEYWORD, ev.help_keyword.as_deref())?;

        if policy.should_record_timestamp() {
            self.writer.write_attribute(attribute::TIME_STAMP, ev.timestamp)?;
        }

        self.writer.write_content(message, code != RAW_MARKUP_CODE)?;
        self.writer.close_element()?;
        self.writer.flush()
    }

    fn message(&mut self, policy: &Policy, ev: &Message) -> Result<()> {
        let importance = ev.effective_importance();
        if !policy.is_message_enabled(importance) {
            trace!("Skipping {} importance message at verbosity {}", importance, policy.verbosity());
            return Ok(());
        }

        self.writer.open_element(names::message_element(ev.kind))?;
        self.writer.write_attribute(attribute::IMPORTANCE, importance)?;

        if policy.should_record_timestamp() {
            self.writer.write_attribute(attribute::TIME_STAMP, ev.timestamp)?;
        }

        self.writer.write_content(&ev.text, false)?;
        self.writer.close_element()?;
        self.writer.flush()
    }
}

fn open_sink(output: Option<&Path>) -> Result<Sink> {
    match output {
        Some(path) if !path.as_os_str().is_empty() => {
            let file = File::create(path).map_err(|source| LoggerError::SinkCreation {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        _ => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Resolves a file against the working directory; empty paths are absent
fn full_path(file: Option<&str>) -> Option<String> {
    let file = file.filter(|f| !f.is_empty())?;

    match std::path::absolute(file) {
        Ok(path) => Some(path.display().to_string()),
        Err(_) => Some(file.to_string()),
    }
}
