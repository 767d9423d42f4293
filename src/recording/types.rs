//! Recording data types

use std::fmt;

/// Marker that starts every event line
pub const EVENT_MARKER: &str = "E:";

/// Which part of the file the parser is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Device description and comments, before any delimiter line
    #[default]
    Preamble,
    /// After a delimiter line; `E:` lines are events from here on
    Events,
}

impl Section {
    /// Check if event lines are accepted in this section
    pub fn accepts_events(&self) -> bool {
        matches!(self, Section::Events)
    }
}

/// A single recorded input event
///
/// Only the timestamp is numeric. Type, code and value are kept as the exact
/// tokens that appeared in the source so they survive a round trip untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Seconds since the recording started
    pub timestamp: f64,
    /// Event type token (e.g. `0003`)
    pub event_type: String,
    /// Event code token (e.g. `0011`)
    pub code: String,
    /// Event value token (e.g. `-001`)
    pub value: String,
}

impl Event {
    /// Create a new event
    pub fn new(
        timestamp: f64,
        event_type: impl Into<String>,
        code: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            event_type: event_type.into(),
            code: code.into(),
            value: value.into(),
        }
    }

    /// Copy of this event moved to a different timestamp
    pub fn at(&self, timestamp: f64) -> Self {
        Self {
            timestamp,
            ..self.clone()
        }
    }
}

impl fmt::Display for Event {
    /// Renders the event line without its terminator
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.6} {} {} {}",
            EVENT_MARKER, self.timestamp, self.event_type, self.code, self.value
        )
    }
}

/// A complete parsed recording
///
/// `header` holds every non-event line verbatim, terminator included, in
/// source order. Header lines are raw bytes: device names and comments are
/// not guaranteed to be UTF-8. `events` holds the events in playback order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recording {
    /// Raw header lines, each ending in its own line terminator
    pub header: Vec<Vec<u8>>,
    /// Events in playback order
    pub events: Vec<Event>,
}

impl Recording {
    /// Create a recording from its parts
    pub fn new<H>(header: impl IntoIterator<Item = H>, events: Vec<Event>) -> Self
    where
        H: Into<Vec<u8>>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            events,
        }
    }

    /// Get the number of events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Check if the recording has no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Timestamp of the first event
    pub fn first_timestamp(&self) -> Option<f64> {
        self.events.first().map(|e| e.timestamp)
    }

    /// Timestamp of the last event
    pub fn last_timestamp(&self) -> Option<f64> {
        self.events.last().map(|e| e.timestamp)
    }

    /// Time between the first and last event, in seconds
    pub fn duration(&self) -> f64 {
        match (self.first_timestamp(), self.last_timestamp()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }
}
