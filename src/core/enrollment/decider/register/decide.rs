// Pure decision function for registration.
//
// Responsibilities
// - Reject a student who already holds the course, before looking at capacity.
// - Reject when the course has no free seat.
// - Otherwise emit StudentRegisteredV1.
// - Never perform input or output.

use crate::core::catalog::Course;
use crate::core::enrollment::{
    decider::{error::DecideError, register::command::RegisterStudent},
    event::{EnrollmentEvent, v1::student_registered::StudentRegisteredV1},
    state::EnrollmentLedger,
};

pub fn decide_register(
    ledger: &EnrollmentLedger,
    course: &Course,
    command: RegisterStudent,
) -> Result<Vec<EnrollmentEvent>, DecideError> {
    if ledger.is_registered(&command.student_id, &course.code) {
        return Err(DecideError::AlreadyRegistered);
    }
    if ledger.available_slots(course) == 0 {
        return Err(DecideError::CourseFull);
    }
    let event = StudentRegisteredV1 {
        student_id: command.student_id,
        course_code: course.code.clone(),
        occurred_at: command.requested_at,
    };
    Ok(vec![EnrollmentEvent::StudentRegisteredV1(event)])
}
