use crate::core::enrollment::event::EnrollmentEvent;
use crate::core::ports::{JournalError, JournalRow};
use uuid::Uuid;

/// Translate decided events into journal rows.
/// `starting_sequence` is the journal length before the append; row i gets starting_sequence + i + 1.
pub fn to_journal_rows(
    starting_sequence: u64,
    events: &[EnrollmentEvent],
) -> Result<Vec<JournalRow>, JournalError> {
    events
        .iter()
        .zip(starting_sequence + 1..)
        .map(|(event, sequence)| -> Result<JournalRow, JournalError> {
            let payload = serde_json::to_value(event)
                .map_err(|e| JournalError::Serialization(e.to_string()))?;
            Ok(JournalRow {
                event_id: Uuid::now_v7(),
                event_type: event.event_type().to_string(),
                event_version: event.event_version(),
                stream_id: event.stream_id(),
                sequence,
                occurred_at: event.occurred_at(),
                payload,
            })
        })
        .collect()
}
