//! Test data builders for creating test objects

use evemu_rs::{Event, Recording};

/// Builder for creating test Recordings
pub struct RecordingBuilder {
    header: Vec<Vec<u8>>,
    events: Vec<Event>,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self {
            header: vec![b"# EVEMU 1.3\n".to_vec(), b"################################\n".to_vec()],
            events: Vec::new(),
        }
    }

    pub fn header_line(mut self, line: &str) -> Self {
        self.header.push(format!("{}\n", line).into_bytes());
        self
    }

    pub fn event(mut self, timestamp: f64, event_type: &str, code: &str, value: &str) -> Self {
        self.events.push(Event::new(timestamp, event_type, code, value));
        self
    }

    /// Button press/release pairs at the given timestamps
    pub fn key_events(mut self, timestamps: &[f64]) -> Self {
        for (i, &t) in timestamps.iter().enumerate() {
            let value = if i % 2 == 0 { "0001" } else { "0000" };
            self.events.push(Event::new(t, "0001", "0131", value));
        }
        self
    }

    pub fn build(self) -> Recording {
        Recording::new(self.header, self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_builder() {
        let recording = RecordingBuilder::new()
            .header_line("# comment")
            .key_events(&[0.5, 1.0])
            .build();

        assert_eq!(recording.header.len(), 3);
        assert_eq!(recording.events[0].value, "0001");
        assert_eq!(recording.events[1].value, "0000");
    }
}
