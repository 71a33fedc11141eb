// Text rendering for the console. Presentation only: nothing here feeds back into the core.

use crate::application::errors::ApplicationError;
use crate::application::query_handlers::course_listing::{CourseView, StudentScheduleView};
use crate::core::enrollment::decider::error::DecideError;
use std::fmt::Write;

pub fn render_available_courses(views: &[CourseView]) -> String {
    let mut out = String::from("Available Courses:\n");
    for view in views {
        let _ = writeln!(out, "Course Code: {}", view.code);
        let _ = writeln!(out, "Title: {}", view.title);
        let _ = writeln!(out, "Description: {}", view.description);
        let _ = writeln!(out, "Available Slots: {}", view.available_slots);
        out.push('\n');
    }
    out
}

pub fn render_schedule(view: &StudentScheduleView) -> String {
    let mut out = format!("Registered Courses for {}:\n", view.name);
    for title in &view.course_titles {
        let _ = writeln!(out, "- {title}");
    }
    out
}

pub fn register_outcome(result: &Result<(), ApplicationError>) -> String {
    match result {
        Ok(()) => "Successfully registered!".to_string(),
        Err(ApplicationError::Rejected(DecideError::AlreadyRegistered)) => {
            "Already registered in the course.".to_string()
        }
        Err(ApplicationError::Rejected(DecideError::CourseFull)) => {
            "Registration failed. Course is full.".to_string()
        }
        Err(error) => common_failure("Registration failed", error),
    }
}

pub fn drop_outcome(result: &Result<(), ApplicationError>) -> String {
    match result {
        Ok(()) => "Successfully dropped the course.".to_string(),
        Err(ApplicationError::Rejected(DecideError::NotRegistered)) => {
            "Course removal failed. You are not registered in the course.".to_string()
        }
        Err(error) => common_failure("Course removal failed", error),
    }
}

fn common_failure(prefix: &str, error: &ApplicationError) -> String {
    match error {
        ApplicationError::StudentNotFound(_) => "Student not found.".to_string(),
        ApplicationError::CourseNotFound(_) => "Course not found.".to_string(),
        other => format!("{prefix}: {other}."),
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::core::ports::JournalError;
    use rstest::rstest;

    #[rstest]
    fn it_should_render_each_course_as_a_block() {
        let views = vec![CourseView {
            code: "CS101".into(),
            title: "Intro to Computer Science".into(),
            description: "Basics of CS".into(),
            available_slots: 30,
        }];
        assert_eq!(
            render_available_courses(&views),
            "Available Courses:\n\
             Course Code: CS101\n\
             Title: Intro to Computer Science\n\
             Description: Basics of CS\n\
             Available Slots: 30\n\n"
        );
    }

    #[rstest]
    fn it_should_render_a_schedule() {
        let view = StudentScheduleView {
            student_id: "1".into(),
            name: "Shrinika".into(),
            course_titles: vec!["Data Structures".into()],
        };
        assert_eq!(
            render_schedule(&view),
            "Registered Courses for Shrinika:\n- Data Structures\n"
        );
    }

    #[rstest]
    #[case(Ok(()), "Successfully registered!")]
    #[case(Err(DecideError::AlreadyRegistered.into()), "Already registered in the course.")]
    #[case(Err(DecideError::CourseFull.into()), "Registration failed. Course is full.")]
    #[case(Err(ApplicationError::StudentNotFound("9".into())), "Student not found.")]
    #[case(Err(ApplicationError::CourseNotFound("X".into())), "Course not found.")]
    #[case(
        Err(JournalError::Backend("Journal offline".into()).into()),
        "Registration failed: journal backend error: Journal offline."
    )]
    fn it_should_describe_register_outcomes(
        #[case] result: Result<(), ApplicationError>,
        #[case] expected: &str,
    ) {
        assert_eq!(register_outcome(&result), expected);
    }

    #[rstest]
    #[case(Ok(()), "Successfully dropped the course.")]
    #[case(
        Err(DecideError::NotRegistered.into()),
        "Course removal failed. You are not registered in the course."
    )]
    #[case(Err(ApplicationError::CourseNotFound("X".into())), "Course not found.")]
    fn it_should_describe_drop_outcomes(
        #[case] result: Result<(), ApplicationError>,
        #[case] expected: &str,
    ) {
        assert_eq!(drop_outcome(&result), expected);
    }
}
