// Evolve function: combine a prior ledger with a new event to produce the next ledger.
//
// Boundaries
// - No input or output. No side effects.
//
// Testing guidance
// - Given a sequence of events, folding them should yield an expected ledger.
// - Re-applying the same event should not apply twice.

use crate::core::enrollment::event::EnrollmentEvent;
use crate::core::enrollment::state::EnrollmentLedger;

pub fn evolve(mut ledger: EnrollmentLedger, event: EnrollmentEvent) -> EnrollmentLedger {
    match event {
        EnrollmentEvent::StudentRegisteredV1(e) => ledger.insert(e.student_id, e.course_code),
        EnrollmentEvent::StudentDroppedV1(e) => ledger.remove(&e.student_id, &e.course_code),
    }
    ledger
}

impl EnrollmentLedger {
    pub fn replay(events: impl IntoIterator<Item = EnrollmentEvent>) -> Self {
        events.into_iter().fold(EnrollmentLedger::new(), evolve)
    }
}
