//! Debug trace events for route sheet parsing
//!
//! The parser never logs on its own. When debug tracing is enabled it hands
//! [`TraceEvent`]s to a [`TraceSink`] supplied by the caller; the default
//! [`TracingSink`] forwards them to `tracing`. Trace output never influences
//! the parse result.

use super::column_mapping::ColumnMapping;
use super::delimiter::Delimiter;
use tracing::{debug, info, warn};

/// A single diagnostic emitted while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// Input was not usable text; the result is empty
    InvalidInput { reason: String },

    /// First line was recognized as a header
    HeaderDetected { line: usize, mapping: ColumnMapping },

    /// Header mode was requested but the first line named no known field
    HeaderNotRecognized { line: usize },

    /// A data line was split into fields
    LineSplit {
        line: usize,
        delimiter: Delimiter,
        fields: Vec<String>,
    },

    /// A data line produced no address and was dropped
    LineSkipped { line: usize, content: String },

    /// Strict mode could not resolve a status token
    UnknownStatus { line: usize, raw_status: String },

    /// Final count for the whole parse
    Summary {
        stops: usize,
        lines: usize,
        skipped: usize,
    },
}

impl std::fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceEvent::InvalidInput { reason } => {
                write!(f, "Invalid route sheet input: {}", reason)
            }
            TraceEvent::HeaderDetected { line, mapping } => {
                write!(f, "Line {} used as header ({})", line, mapping)
            }
            TraceEvent::HeaderNotRecognized { line } => write!(
                f,
                "Line {} names no known column; using default column order",
                line
            ),
            TraceEvent::LineSplit {
                line,
                delimiter,
                fields,
            } => write!(f, "Line {} split by {}: {:?}", line, delimiter, fields),
            TraceEvent::LineSkipped { line, content } => {
                write!(f, "Line {} skipped: missing address ({:?})", line, content)
            }
            TraceEvent::UnknownStatus { line, raw_status } => write!(
                f,
                "Line {} has invalid status '{}'; marked as unknown",
                line, raw_status
            ),
            TraceEvent::Summary {
                stops,
                lines,
                skipped,
            } => write!(
                f,
                "Parsed {} stops from {} lines ({} skipped)",
                stops, lines, skipped
            ),
        }
    }
}

/// Receiver for parser trace events
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

impl<F> TraceSink for F
where
    F: FnMut(TraceEvent),
{
    fn record(&mut self, event: TraceEvent) {
        self(event)
    }
}

/// Forwards trace events to the `tracing` subscriber
///
/// Skips and unknown statuses log at `warn`, the summary at `info`,
/// everything else at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&mut self, event: TraceEvent) {
        match &event {
            TraceEvent::InvalidInput { .. }
            | TraceEvent::LineSkipped { .. }
            | TraceEvent::UnknownStatus { .. } => warn!("{}", event),
            TraceEvent::Summary { .. } => info!("{}", event),
            _ => debug!("{}", event),
        }
    }
}

/// Keeps every event in memory, in emission order
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    events: Vec<TraceEvent>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// Count the events matching a predicate
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&TraceEvent) -> bool,
    {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl TraceSink for CollectingSink {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
