// Pure decision function for dropping a course.
//
// Responsibilities
// - Reject when the student does not hold the course.
// - Otherwise emit StudentDroppedV1, which frees one seat when evolved.

use crate::core::enrollment::{
    decider::{drop_course::command::DropCourse, error::DecideError},
    event::{EnrollmentEvent, v1::student_dropped::StudentDroppedV1},
    state::EnrollmentLedger,
};

pub fn decide_drop(
    ledger: &EnrollmentLedger,
    command: DropCourse,
) -> Result<Vec<EnrollmentEvent>, DecideError> {
    if !ledger.is_registered(&command.student_id, &command.course_code) {
        return Err(DecideError::NotRegistered);
    }
    Ok(vec![EnrollmentEvent::StudentDroppedV1(StudentDroppedV1 {
        student_id: command.student_id,
        course_code: command.course_code,
        occurred_at: command.requested_at,
    })])
}

#[cfg(test)]
mod drop_decide_tests {
    use super::*;
    use crate::core::catalog::Course;
    use crate::core::enrollment::evolve::evolve;
    use crate::test_support::fixtures::commands::drop_course::DropCourseBuilder;
    use crate::test_support::fixtures::events::make_student_registered_v1_event;
    use rstest::{fixture, rstest};

    #[fixture]
    fn registered_ledger() -> EnrollmentLedger {
        evolve(
            EnrollmentLedger::new(),
            EnrollmentEvent::StudentRegisteredV1(make_student_registered_v1_event()),
        )
    }

    #[rstest]
    fn it_should_decide_to_drop_the_course(registered_ledger: EnrollmentLedger) {
        let command = DropCourseBuilder::new().build();
        let events = decide_drop(&registered_ledger, command.clone()).unwrap();
        assert_eq!(
            events,
            vec![EnrollmentEvent::StudentDroppedV1(StudentDroppedV1 {
                student_id: command.student_id,
                course_code: command.course_code,
                occurred_at: command.requested_at,
            })]
        );
    }

    #[rstest]
    fn it_should_restore_a_seat_once_evolved(registered_ledger: EnrollmentLedger) {
        let course = Course::new("CS101", "Intro to Computer Science", "Basics of CS", 1).unwrap();
        assert_eq!(registered_ledger.available_slots(&course), 0);
        let events = decide_drop(&registered_ledger, DropCourseBuilder::new().build()).unwrap();
        let ledger = events.into_iter().fold(registered_ledger, evolve);
        assert_eq!(ledger.available_slots(&course), 1);
    }

    #[rstest]
    #[case("2", "CS101")]
    #[case("1", "CS102")]
    fn it_should_decide_that_the_student_is_not_registered(
        registered_ledger: EnrollmentLedger,
        #[case] student_id: &str,
        #[case] course_code: &str,
    ) {
        let command = DropCourseBuilder::new()
            .student_id(student_id)
            .course_code(course_code)
            .build();
        assert_eq!(decide_drop(&registered_ledger, command), Err(DecideError::NotRegistered));
    }
}
