// Command data type for registering a student in a course.
//
// Responsibilities
// - Carry input data for the decider to validate and convert into an event.
// - Be independent of the console or any other transport.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterStudent {
    pub student_id: String,
    pub course_code: String,
    pub requested_at: i64,
}

impl RegisterStudent {
    pub fn new(student_id: impl Into<String>, course_code: impl Into<String>, requested_at: i64) -> Self {
        Self {
            student_id: student_id.into(),
            course_code: course_code.into(),
            requested_at,
        }
    }
}
