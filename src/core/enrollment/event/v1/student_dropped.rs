// Event payload: StudentDroppedV1.
//
// Purpose
// - Record that a student gave up a seat, freeing one slot in the course.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct StudentDroppedV1 {
    pub student_id: String,
    pub course_code: String,
    pub occurred_at: i64,
}
