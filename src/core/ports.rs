// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the enrollment journal as a trait, so the application codes against it and adapters
//   decide where the rows go.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits in the adapters layer.
// - The journal is synchronous. Registration appends and applies in one uninterrupted step.
//
// Testing guidance
// - Use the in memory journal, and toggle it offline to exercise failure paths.

use serde_json::Value as Json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct JournalRow {
    pub event_id: Uuid,
    pub event_type: String,
    pub event_version: i32,
    pub stream_id: String,
    pub sequence: u64,
    pub occurred_at: i64,
    pub payload: Json,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JournalError {
    #[error("journal backend error: {0}")]
    Backend(String),

    #[error("could not serialize event: {0}")]
    Serialization(String),
}

pub trait EnrollmentJournal {
    /// Appends all rows or none of them.
    fn append(&mut self, rows: Vec<JournalRow>) -> Result<(), JournalError>;

    fn rows(&self) -> &[JournalRow];
}
