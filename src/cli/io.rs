//! Opening sources and sinks for recordings
//!
//! stdin and stdout are passed in by the caller rather than reached for
//! here, so the same code runs against in-memory buffers in tests.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use crate::error::{EvemuError, Result};
use crate::recording::{parse, serialize, Recording};

use super::args::Location;

/// Read and parse a recording from `location`
///
/// A missing or unopenable file is [`EvemuError::SourceUnavailable`]. Errors
/// after the file is open are [`EvemuError::ReadFailure`].
pub fn read_recording<R: BufRead>(location: &Location, stdin: &mut R) -> Result<Recording> {
    match location {
        Location::Stdio => {
            tracing::debug!("Reading recording from stdin");
            parse(stdin)
        }
        Location::Path(path) => {
            tracing::debug!("Reading recording from {:?}", path);
            let file = File::open(path).map_err(|source| EvemuError::SourceUnavailable {
                path: path.clone(),
                source,
            })?;
            parse(BufReader::new(file))
        }
    }
}

/// Serialize `recording` to `location` and flush it
///
/// The output file is only created here, after the transform has finished,
/// so a failed run leaves no partial file behind.
pub fn write_recording<W: Write>(
    recording: &Recording,
    location: &Location,
    stdout: &mut W,
) -> Result<()> {
    match location {
        Location::Stdio => serialize(recording, BufWriter::new(stdout)),
        Location::Path(path) => {
            tracing::debug!("Writing recording to {:?}", path);
            let file = File::create(path).map_err(|source| EvemuError::SinkUnavailable {
                path: path.clone(),
                source,
            })?;
            serialize(recording, BufWriter::new(file))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;
    use crate::recording::Event;

    #[test]
    fn test_read_from_stdin_buffer() {
        let mut stdin = io::Cursor::new("#####\nE: 1.0 0001 0131 0001\n");
        let recording = read_recording(&Location::Stdio, &mut stdin).unwrap();
        assert_eq!(recording.event_count(), 1);
    }

    #[test]
    fn test_read_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let location = Location::Path(dir.path().join("missing.evemu"));
        let err = read_recording(&location, &mut io::empty()).unwrap_err();
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn test_write_to_file_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let location = Location::Path(dir.path().join("out.evemu"));
        let recording = Recording::new(
            vec!["#####\n"],
            vec![Event::new(2.0, "0001", "0131", "0001")],
        );

        write_recording(&recording, &location, &mut io::sink()).unwrap();
        let read_back = read_recording(&location, &mut io::empty()).unwrap();
        assert_eq!(read_back, recording);
    }

    #[test]
    fn test_write_to_stdout_buffer() {
        let recording = Recording {
            header: Vec::new(),
            events: vec![Event::new(0.25, "0001", "0131", "0000")],
        };
        let mut stdout = Vec::new();
        write_recording(&recording, &Location::Stdio, &mut stdout).unwrap();
        assert_eq!(stdout, b"E: 0.250000 0001 0131 0000\n");
    }

    /// Sink that counts how many writes reach it
    #[derive(Default)]
    struct CountingSink {
        writes: usize,
        bytes: Vec<u8>,
    }

    impl io::Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stdout_is_written_in_one_batch() {
        let events = (0..500)
            .map(|i| Event::new(i as f64 * 0.01, "0001", "0131", "0001"))
            .collect();
        let recording = Recording::new(vec!["#####\n"], events);
        let mut stdout = CountingSink::default();

        write_recording(&recording, &Location::Stdio, &mut stdout).unwrap();

        assert_eq!(stdout.writes, 1);
        assert_eq!(stdout.bytes.len(), 6 + 500 * "E: 0.000000 0001 0131 0001\n".len());
    }

    #[test]
    fn test_non_utf8_header_survives_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("latin1.evemu");
        let output = dir.path().join("copy.evemu");
        let bytes = b"# Input device name: \"Caf\xe9 pad\"\n#####\nE: 0.500000 0001 0131 0001\n";
        std::fs::write(&input, bytes).unwrap();

        let recording = read_recording(&Location::Path(input), &mut io::empty()).unwrap();
        write_recording(&recording, &Location::Path(output.clone()), &mut io::sink()).unwrap();

        assert_eq!(std::fs::read(output).unwrap(), bytes);
    }

    #[test]
    fn test_write_into_missing_directory_is_sink_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let target: PathBuf = dir.path().join("no_such_dir").join("out.evemu");
        let location = Location::Path(target.clone());
        let err = write_recording(&Recording::default(), &location, &mut io::sink()).unwrap_err();
        match err {
            EvemuError::SinkUnavailable { path, .. } => assert_eq!(path, target),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
