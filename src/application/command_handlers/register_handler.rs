// Registration command handler orchestrates the write flow.
//
// Responsibilities
// - Resolve the student, then the course. An unknown student is reported first.
// - Call the decider against the current ledger.
// - Commit the accepted events through the system, which journals and then applies them.

use crate::application::errors::ApplicationError;
use crate::application::registration_system::RegistrationSystem;
use crate::core::enrollment::decider::register::{command::RegisterStudent, decide::decide_register};
use crate::core::ports::EnrollmentJournal;
use tracing::{info, warn};

pub fn handle_register<TJournal>(
    system: &mut RegistrationSystem<TJournal>,
    command: RegisterStudent,
) -> Result<(), ApplicationError>
where
    TJournal: EnrollmentJournal,
{
    let student_id = command.student_id.clone();
    let course_code = command.course_code.clone();

    if system.roster.find_student(&student_id).is_none() {
        info!(%student_id, "registration for unknown student");
        return Err(ApplicationError::StudentNotFound(student_id));
    }
    let Some(course) = system.catalog.find_course(&course_code) else {
        info!(%student_id, %course_code, "registration for unknown course");
        return Err(ApplicationError::CourseNotFound(course_code));
    };

    let events = decide_register(&system.ledger, course, command).map_err(|reason| {
        info!(%student_id, %course_code, %reason, "registration rejected");
        ApplicationError::from(reason)
    })?;

    system.commit(events).inspect_err(|error| {
        warn!(%student_id, %course_code, %error, "registration not committed");
    })?;

    info!(
        %student_id,
        %course_code,
        available_slots = system.available_slots(&course_code).unwrap_or_default(),
        "student registered"
    );
    Ok(())
}
