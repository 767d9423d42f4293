//! Repeat: loop a recording back to back

use crate::recording::{Event, Recording};

/// Replay `recording` `count` times back to back
///
/// Copy `i` (from zero) places each event at
/// `i * duration + (timestamp - first_timestamp)`, where `duration` is the
/// span from the first to the last event. The output always starts at zero.
///
/// An empty recording is returned unchanged. A count of zero or less yields
/// the header with no events.
pub fn repeat(recording: Recording, count: i64) -> Recording {
    let Some(start) = recording.first_timestamp() else {
        return recording;
    };

    let duration = recording.duration();
    let copies = count.max(0);
    tracing::debug!(
        "Repeating {} events {} times, cycle {:.6}s",
        recording.event_count(),
        copies,
        duration
    );

    let Recording { header, events } = recording;
    let events: Vec<Event> = (0..copies)
        .flat_map(|cycle| {
            let base_time = cycle as f64 * duration;
            events
                .iter()
                .map(move |event| event.at(base_time + (event.timestamp - start)))
        })
        .collect();

    Recording { header, events }
}
