// Command data type for dropping a course a student holds.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropCourse {
    pub student_id: String,
    pub course_code: String,
    pub requested_at: i64,
}

impl DropCourse {
    pub fn new(student_id: impl Into<String>, course_code: impl Into<String>, requested_at: i64) -> Self {
        Self {
            student_id: student_id.into(),
            course_code: course_code.into(),
            requested_at,
        }
    }
}
