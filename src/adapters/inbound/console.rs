// Line-oriented console prompt.
//
// Purpose
// - Collect a student id and a course code as plain text and drive register and drop.
//
// Responsibilities
// - Read one line per answer. The line terminator is stripped, nothing else.
// - Show the catalog before registering and the student's schedule before dropping.
// - Stop at the exit option or at end of input.
//
// Boundaries
// - Each command runs to completion before the next line is read.

use crate::adapters::inbound::render::{
    drop_outcome, register_outcome, render_available_courses, render_schedule,
};
use crate::application::query_handlers::course_listing::{list_course_views, student_schedule};
use crate::application::registration_system::RegistrationSystem;
use crate::core::enrollment::decider::drop_course::command::DropCourse;
use crate::core::enrollment::decider::register::command::RegisterStudent;
use crate::core::ports::EnrollmentJournal;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const MENU: &str = "\
Course Registration
1. Register for a course
2. Drop a course
3. List available courses
4. Exit
";

pub fn system_clock() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub struct Console<TReader, TWriter> {
    reader: TReader,
    writer: TWriter,
    clock: fn() -> i64,
}

impl<TReader, TWriter> Console<TReader, TWriter>
where
    TReader: AsyncBufRead + Unpin,
    TWriter: AsyncWrite + Unpin,
{
    pub fn new(reader: TReader, writer: TWriter) -> Self {
        Self {
            reader,
            writer,
            clock: system_clock,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn into_writer(self) -> TWriter {
        self.writer
    }

    pub async fn run<TJournal>(&mut self, system: &mut RegistrationSystem<TJournal>) -> io::Result<()>
    where
        TJournal: EnrollmentJournal,
    {
        loop {
            self.write(MENU).await?;
            let Some(choice) = self.prompt("Choose an option: ").await? else {
                break;
            };
            let keep_going = match choice.as_str() {
                "1" => self.student_registration(system).await?,
                "2" => self.student_course_removal(system).await?,
                "3" => {
                    let listing = render_available_courses(&list_course_views(system));
                    self.write(&listing).await?;
                    true
                }
                "4" => false,
                other => {
                    self.write(&format!("Unknown option: {other}\n")).await?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        self.write("Goodbye.\n").await
    }

    /// Returns false when input ended mid-command.
    async fn student_registration<TJournal>(
        &mut self,
        system: &mut RegistrationSystem<TJournal>,
    ) -> io::Result<bool>
    where
        TJournal: EnrollmentJournal,
    {
        let Some(student_id) = self.prompt("Enter Student ID: ").await? else {
            return Ok(false);
        };
        if system.find_student(&student_id).is_none() {
            self.write("Student not found.\n").await?;
            return Ok(true);
        }

        let listing = render_available_courses(&list_course_views(system));
        self.write(&listing).await?;
        let Some(course_code) = self.prompt("Enter Course Code to Register: ").await? else {
            return Ok(false);
        };

        let result = system.register(RegisterStudent::new(student_id, course_code, (self.clock)()));
        self.write(&format!("{}\n", register_outcome(&result))).await?;
        Ok(true)
    }

    async fn student_course_removal<TJournal>(
        &mut self,
        system: &mut RegistrationSystem<TJournal>,
    ) -> io::Result<bool>
    where
        TJournal: EnrollmentJournal,
    {
        let Some(student_id) = self.prompt("Enter Student ID: ").await? else {
            return Ok(false);
        };
        let Some(schedule) = student_schedule(system, &student_id) else {
            self.write("Student not found.\n").await?;
            return Ok(true);
        };

        self.write(&render_schedule(&schedule)).await?;
        let Some(course_code) = self.prompt("Enter Course Code to Drop: ").await? else {
            return Ok(false);
        };

        let result = system.drop_course(DropCourse::new(student_id, course_code, (self.clock)()));
        self.write(&format!("{}\n", drop_outcome(&result))).await?;
        Ok(true)
    }

    async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.write(label).await?;
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }
}

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::adapters::in_memory::in_memory_journal::InMemoryJournal;
    use crate::test_support::fixtures::system::make_system;
    use rstest::rstest;

    fn fixed_clock() -> i64 {
        1_700_000_000_000
    }

    async fn run_script(
        system: &mut RegistrationSystem<InMemoryJournal>,
        script: &'static str,
    ) -> String {
        let mut console = Console::new(script.as_bytes(), Vec::new()).with_clock(fixed_clock);
        console.run(system).await.expect("console run failed");
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_register_through_the_prompt() {
        let mut system = make_system(30);
        let output = run_script(&mut system, "1\n1\nCS101\n4\n").await;
        assert!(output.contains("Available Courses:"));
        assert!(output.contains("Successfully registered!"));
        assert!(output.ends_with("Goodbye.\n"));
        assert_eq!(system.available_slots("CS101"), Some(29));
        assert_eq!(system.journal().rows()[0].occurred_at, fixed_clock());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_show_the_schedule_before_dropping() {
        let mut system = make_system(30);
        let output = run_script(&mut system, "1\n2\nCS102\n2\n2\nCS102\n").await;
        assert!(output.contains("Registered Courses for Kashvi:\n- Data Structures\n"));
        assert!(output.contains("Successfully dropped the course."));
        assert!(system.registered_courses("2").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_unknown_identifiers() {
        let mut system = make_system(30);
        let output = run_script(&mut system, "1\n7\n1\n1\ncs101\n2\n1\nCS101\n").await;
        assert!(output.contains("Student not found."));
        assert!(output.contains("Course not found."));
        assert!(output.contains("Course removal failed. You are not registered in the course."));
        assert!(system.ledger().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_stop_at_end_of_input_mid_command() {
        let mut system = make_system(30);
        let output = run_script(&mut system, "1\n1\n").await;
        assert!(output.ends_with("Enter Course Code to Register: Goodbye.\n"));
        assert!(system.ledger().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_crlf_input_exact_apart_from_the_terminator() {
        let mut system = make_system(30);
        let output = run_script(&mut system, "9\r\n1\r\n1\r\nCS102\r\n").await;
        assert!(output.contains("Unknown option: 9"));
        assert!(output.contains("Successfully registered!"));
        assert!(system.ledger().is_registered("1", "CS102"));
    }
}
