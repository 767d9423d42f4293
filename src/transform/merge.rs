//! Merge: append one recording after another

use crate::recording::Recording;

/// Append `addition` to `base`, shifting it so it starts where `base` ends
///
/// The offset is `base.last - addition.first`, applied to every addition
/// event. The first addition event therefore shares its timestamp with the
/// last base event. The result keeps `base`'s header.
///
/// Addition events at exactly `addition.first` are set to `base.last` rather
/// than `t + offset`, which can differ from it by one ulp.
///
/// If either side has no events the other side is returned as is, header
/// included.
pub fn merge(base: Recording, addition: Recording) -> Recording {
    let (Some(last_base), Some(first_addition)) =
        (base.last_timestamp(), addition.first_timestamp())
    else {
        return if base.is_empty() { addition } else { base };
    };

    let offset = last_base - first_addition;
    tracing::debug!(
        "Merging {} events after {} with offset {:.6}s",
        addition.event_count(),
        base.event_count(),
        offset
    );

    let Recording { header, mut events } = base;
    events.reserve(addition.events.len());
    events.extend(
        addition
            .events
            .into_iter()
            .map(|mut event| {
                // Events at the addition's start land exactly on the base's end
                event.timestamp = if event.timestamp == first_addition {
                    last_base
                } else {
                    event.timestamp + offset
                };
                event
            }),
    );

    Recording { header, events }
}
