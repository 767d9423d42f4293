//! Serialization of recordings back to the evemu text format

use std::io::Write;

use crate::error::{EvemuError, Result};

use super::types::Recording;

/// Write a recording to any sink and flush it
///
/// The whole recording is rendered with [`to_bytes`] first, so a sink sees
/// one write rather than one per line.
pub fn serialize<W: Write>(recording: &Recording, mut writer: W) -> Result<()> {
    writer
        .write_all(&to_bytes(recording))
        .map_err(EvemuError::WriteFailure)?;
    writer.flush().map_err(EvemuError::WriteFailure)
}

/// Render a recording in the evemu text format
///
/// Header lines go out verbatim (a missing terminator gets `\n`), followed by
/// one `E:` line per event with the timestamp at six decimal places.
pub fn to_bytes(recording: &Recording) -> Vec<u8> {
    let mut out = Vec::new();
    for line in &recording.header {
        out.extend_from_slice(line);
        if !line.ends_with(b"\n") {
            out.push(b'\n');
        }
    }
    for event in &recording.events {
        out.extend_from_slice(event.to_string().as_bytes());
        out.push(b'\n');
    }
    out
}
