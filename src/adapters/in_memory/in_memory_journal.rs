// In memory implementation of the EnrollmentJournal port.
//
// Purpose
// - Keep the enrollment history for the running process and for tests.
//
// Responsibilities
// - Store rows in append order.
// - Refuse a batch if any (stream_id, sequence) was seen before, leaving the journal unchanged.

use crate::core::ports::{EnrollmentJournal, JournalError, JournalRow};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct InMemoryJournal {
    rows: Vec<JournalRow>,
    seen: HashSet<(String, u64)>,
    is_offline: bool,
}

impl InMemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

impl EnrollmentJournal for InMemoryJournal {
    fn append(&mut self, rows: Vec<JournalRow>) -> Result<(), JournalError> {
        if self.is_offline {
            return Err(JournalError::Backend("Journal offline".into()));
        }

        let mut batch = HashSet::with_capacity(rows.len());
        for row in &rows {
            let key = (row.stream_id.clone(), row.sequence);
            if self.seen.contains(&key) || !batch.insert(key) {
                return Err(JournalError::Backend(format!(
                    "duplicate journal row for stream {} #{}",
                    row.stream_id, row.sequence
                )));
            }
        }

        self.seen.extend(batch);
        self.rows.extend(rows);
        Ok(())
    }

    fn rows(&self) -> &[JournalRow] {
        &self.rows
    }
}
