use crate::core::enrollment::decider::drop_course::command::DropCourse;

pub struct DropCourseBuilder {
    inner: DropCourse,
}

impl Default for DropCourseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DropCourseBuilder {
    pub fn new() -> Self {
        Self {
            inner: DropCourse::new("1", "CS101", 1_700_000_360_000),
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

    pub fn build(self) -> DropCourse {
        self.inner
    }
}
