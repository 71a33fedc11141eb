// Student roster.
//
// Purpose
// - Own the set of students and answer lookups by student id.
//
// Boundaries
// - The roster does not track registrations. See core::enrollment.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("student id {0} is already on the roster")]
    DuplicateStudentId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub student_id: String,
    pub name: String,
}

impl Student {
    pub fn new(student_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_student(&mut self, student: Student) -> Result<(), RosterError> {
        if self.find_student(&student.student_id).is_some() {
            return Err(RosterError::DuplicateStudentId(student.student_id));
        }
        self.students.push(student);
        Ok(())
    }

    pub fn find_student(&self, student_id: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.student_id == student_id)
    }

    pub fn list_students(&self) -> &[Student] {
        &self.students
    }
}

#[cfg(test)]
mod roster_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn roster() -> Roster {
        let mut roster = Roster::new();
        roster.add_student(Student::new("1", "Shrinika")).unwrap();
        roster.add_student(Student::new("2", "Kashvi")).unwrap();
        roster
    }

    #[rstest]
    fn it_should_find_a_student_by_id(roster: Roster) {
        let student = roster.find_student("2").expect("student 2 should exist");
        assert_eq!(student.name, "Kashvi");
    }

    #[rstest]
    fn it_should_report_an_unknown_id_as_absent(roster: Roster) {
        assert!(roster.find_student("3").is_none());
        assert!(roster.find_student("1 ").is_none());
    }

    #[rstest]
    fn it_should_reject_a_duplicate_id(mut roster: Roster) {
        let result = roster.add_student(Student::new("1", "Someone Else"));
        assert_eq!(result, Err(RosterError::DuplicateStudentId("1".to_string())));
        assert_eq!(roster.list_students().len(), 2);
        assert_eq!(roster.find_student("1").unwrap().name, "Shrinika");
    }
}
