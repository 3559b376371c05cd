//! Replays a JSON lines event stream into an event source
use std::io::BufRead;

use anyhow::{Context, Result};
use tracing::{event, instrument, Level};

use xmlbuildlog::{Event, EventSource};

/// Parses one line of the stream; blank lines carry no event
pub fn parse_event_line(line: &str) -> Result<Option<Event>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let event = serde_json::from_str::<Event>(line)?;
    Ok(Some(event))
}

/// Dispatches every event in `reader` to `source`, in order. Returns the
/// number of events delivered.
#[instrument(skip_all)]
pub fn read_events<R: BufRead>(reader: R, source: &mut EventSource) -> Result<usize> {
    let mut delivered = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read event stream at line {}", line_no))?;

        let Some(ev) = parse_event_line(&line).with_context(|| format!("Malformed event on line {}", line_no))? else {
            continue;
        };

        event!(Level::DEBUG, "Dispatching event from line {}: {:?}", line_no, ev);
        source.dispatch(&ev)?;
        delivered += 1;
    }

    Ok(delivered)
}
