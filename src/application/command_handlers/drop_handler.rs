// Drop command handler. Same flow as registration, with the drop decider.

use crate::application::errors::ApplicationError;
use crate::application::registration_system::RegistrationSystem;
use crate::core::enrollment::decider::drop_course::{command::DropCourse, decide::decide_drop};
use crate::core::ports::EnrollmentJournal;
use tracing::{info, warn};

pub fn handle_drop<TJournal>(
    system: &mut RegistrationSystem<TJournal>,
    command: DropCourse,
) -> Result<(), ApplicationError>
where
    TJournal: EnrollmentJournal,
{
    let student_id = command.student_id.clone();
    let course_code = command.course_code.clone();

    if system.roster.find_student(&student_id).is_none() {
        info!(%student_id, "drop for unknown student");
        return Err(ApplicationError::StudentNotFound(student_id));
    }
    if system.catalog.find_course(&course_code).is_none() {
        info!(%student_id, %course_code, "drop for unknown course");
        return Err(ApplicationError::CourseNotFound(course_code));
    }

    let events = decide_drop(&system.ledger, command).map_err(|reason| {
        info!(%student_id, %course_code, %reason, "drop rejected");
        ApplicationError::from(reason)
    })?;

    system.commit(events).inspect_err(|error| {
        warn!(%student_id, %course_code, %error, "drop not committed");
    })?;

    info!(%student_id, %course_code, "student dropped course");
    Ok(())
}
