// EnrollmentLedger is the canonical enrollment state after folding events.
//
// Purpose
// - Hold the student/course relation once, in registration order.
// - Derive both directions of the relation from that single list.
//
// Boundaries
// - This file must not perform input or output.
// - Capacity is a property of the course; the ledger only counts.

use crate::core::catalog::Course;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub student_id: String,
    pub course_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentLedger {
    enrollments: Vec<Enrollment>,
}

impl EnrollmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, student_id: &str, course_code: &str) -> bool {
        self.enrollments
            .iter()
            .any(|e| e.student_id == student_id && e.course_code == course_code)
    }

    pub fn enrolled_count(&self, course_code: &str) -> usize {
        self.enrollments
            .iter()
            .filter(|e| e.course_code == course_code)
            .count()
    }

    pub fn available_slots(&self, course: &Course) -> u32 {
        let enrolled = u32::try_from(self.enrolled_count(&course.code)).unwrap_or(u32::MAX);
        course.capacity.saturating_sub(enrolled)
    }

    /// Course codes the student holds, oldest registration first.
    pub fn courses_of<'a>(&'a self, student_id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.enrollments
            .iter()
            .filter(move |e| e.student_id == student_id)
            .map(|e| e.course_code.as_str())
    }

    pub fn students_in<'a>(&'a self, course_code: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.enrollments
            .iter()
            .filter(move |e| e.course_code == course_code)
            .map(|e| e.student_id.as_str())
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn len(&self) -> usize {
        self.enrollments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrollments.is_empty()
    }

    pub(crate) fn insert(&mut self, student_id: String, course_code: String) {
        if !self.is_registered(&student_id, &course_code) {
            self.enrollments.push(Enrollment {
                student_id,
                course_code,
            });
        }
    }

    pub(crate) fn remove(&mut self, student_id: &str, course_code: &str) {
        self.enrollments
            .retain(|e| !(e.student_id == student_id && e.course_code == course_code));
    }
}
