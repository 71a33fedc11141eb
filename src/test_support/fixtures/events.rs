use crate::core::enrollment::event::v1::student_registered::StudentRegisteredV1;

pub fn make_student_registered_v1_event() -> StudentRegisteredV1 {
    StudentRegisteredV1 {
        student_id: "1".to_string(),
        course_code: "CS101".to_string(),
        occurred_at: 1_700_000_000_000,
    }
}
