// Shared test fixture for the RegisterStudent command.

use crate::core::enrollment::decider::register::command::RegisterStudent;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterStudentDto {
    pub student_id: String,
    pub course_code: String,
}

pub struct RegisterStudentBuilder {
    inner: RegisterStudent,
}

impl Default for RegisterStudentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterStudentBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/commands/json/register_student.json").unwrap();
        let dto: RegisterStudentDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegisterStudent {
                student_id: dto.student_id,
                course_code: dto.course_code,
                requested_at: 1_700_000_000_000,
            },
        }
    }

    pub fn student_id(mut self, v: impl Into<String>) -> Self {
        self.inner.student_id = v.into();
        self
    }

    pub fn course_code(mut self, v: impl Into<String>) -> Self {
        self.inner.course_code = v.into();
        self
    }

    pub fn requested_at(mut self, v: i64) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> RegisterStudent {
        self.inner
    }
}
