//! Line-oriented parser for evemu recordings
//!
//! The parser is a two-state machine over [`Section`]. Everything before the
//! first delimiter line is header. After it, lines starting with `E:` are
//! parsed as events and anything else is still kept as header.
//!
//! An `E:` line that cannot be parsed is dropped entirely. It ends up in
//! neither the header nor the event list, and parsing carries on.
//!
//! Lines are read as bytes. Header lines need not be UTF-8 and are kept as
//! they are; only event lines are decoded.

use std::io::BufRead;

use crate::error::{EvemuError, Result};

use super::types::{Event, Recording, Section, EVENT_MARKER};

/// How a single source line is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// A run of `#` characters; switches to the event section
    Delimiter,
    /// An `E:` line inside the event section
    Event,
    /// Kept verbatim in the header
    Header,
}

fn classify(content: &[u8], section: Section) -> LineKind {
    if is_delimiter(content) {
        LineKind::Delimiter
    } else if section.accepts_events() && content.starts_with(EVENT_MARKER.as_bytes()) {
        LineKind::Event
    } else {
        LineKind::Header
    }
}

/// Check if a line (without terminator) is a section delimiter
pub fn is_delimiter(content: &[u8]) -> bool {
    !content.is_empty() && content.iter().all(|&b| b == b'#')
}

/// Parse one `E:` line (without terminator)
///
/// Returns `None` when the marker is missing, fewer than four fields follow
/// it, or the timestamp is not a float. Fields past the fourth are ignored.
pub fn parse_event_line(content: &str) -> Option<Event> {
    let rest = content.strip_prefix(EVENT_MARKER)?;
    let mut fields = rest.split_whitespace();

    let timestamp = fields.next()?.parse::<f64>().ok()?;
    let event_type = fields.next()?;
    let code = fields.next()?;
    let value = fields.next()?;

    Some(Event::new(timestamp, event_type, code, value))
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Parse a recording from any buffered reader
///
/// Only I/O failures are errors. Malformed event lines, including ones that
/// are not valid UTF-8, are skipped.
pub fn parse<R: BufRead>(mut reader: R) -> Result<Recording> {
    let mut recording = Recording::default();
    let mut section = Section::default();
    let mut line = Vec::new();
    let mut line_number = 0usize;
    let mut dropped = 0usize;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(EvemuError::ReadFailure)?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let content = strip_terminator(&line);
        match classify(content, section) {
            LineKind::Delimiter => {
                if section != Section::Events {
                    tracing::trace!("Event section starts at line {}", line_number);
                }
                section = Section::Events;
                recording.header.push(terminated(&line));
            }
            LineKind::Event => {
                match std::str::from_utf8(content).ok().and_then(parse_event_line) {
                    Some(event) => recording.events.push(event),
                    None => {
                        dropped += 1;
                        tracing::debug!(
                            "Dropping malformed event line {}: {:?}",
                            line_number,
                            String::from_utf8_lossy(content)
                        );
                    }
                }
            }
            LineKind::Header => recording.header.push(terminated(&line)),
        }
    }

    tracing::debug!(
        "Parsed {} header lines and {} events ({} dropped)",
        recording.header.len(),
        recording.events.len(),
        dropped
    );

    Ok(recording)
}

/// Parse a recording held in memory
pub fn parse_str(text: &str) -> Result<Recording> {
    parse(text.as_bytes())
}

fn terminated(line: &[u8]) -> Vec<u8> {
    let mut owned = line.to_vec();
    if !owned.ends_with(b"\n") {
        owned.push(b'\n');
    }
    owned
}
