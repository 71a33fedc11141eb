// Read-only views for listing courses and a student's schedule.
//
// Responsibilities
// - Preserve catalog order for courses and registration order for a schedule.
// - Never mutate. Views are snapshots taken between commands.

use crate::application::registration_system::RegistrationSystem;
use crate::core::ports::EnrollmentJournal;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CourseView {
    pub code: String,
    pub title: String,
    pub description: String,
    pub available_slots: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StudentScheduleView {
    pub student_id: String,
    pub name: String,
    pub course_titles: Vec<String>,
}

pub fn list_course_views<TJournal>(system: &RegistrationSystem<TJournal>) -> Vec<CourseView>
where
    TJournal: EnrollmentJournal,
{
    system
        .list_courses()
        .iter()
        .map(|course| CourseView {
            code: course.code.clone(),
            title: course.title.clone(),
            description: course.description.clone(),
            available_slots: system.ledger().available_slots(course),
        })
        .collect()
}

/// `None` when the student is not on the roster.
pub fn student_schedule<TJournal>(
    system: &RegistrationSystem<TJournal>,
    student_id: &str,
) -> Option<StudentScheduleView>
where
    TJournal: EnrollmentJournal,
{
    let student = system.find_student(student_id)?;
    Some(StudentScheduleView {
        student_id: student.student_id.clone(),
        name: student.name.clone(),
        course_titles: system
            .registered_courses(student_id)
            .into_iter()
            .map(|course| course.title.clone())
            .collect(),
    })
}
