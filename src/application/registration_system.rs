// Registration system: the single owner of catalog, roster, ledger and journal.
//
// Responsibilities
// - Route register and drop commands to their handlers.
// - Commit decided events: journal first, then evolve the ledger. If the journal refuses the
//   rows, the ledger is not touched.
// - Answer read-only lookups for the query handlers and the console.

use crate::application::command_handlers::{
    drop_handler::handle_drop, register_handler::handle_register,
};
use crate::application::errors::ApplicationError;
use crate::application::journal_rows::to_journal_rows;
use crate::core::catalog::{Catalog, Course};
use crate::core::enrollment::decider::drop_course::command::DropCourse;
use crate::core::enrollment::decider::register::command::RegisterStudent;
use crate::core::enrollment::event::EnrollmentEvent;
use crate::core::enrollment::evolve::evolve;
use crate::core::enrollment::state::EnrollmentLedger;
use crate::core::ports::{EnrollmentJournal, JournalError};
use crate::core::roster::{Roster, Student};

pub struct RegistrationSystem<TJournal>
where
    TJournal: EnrollmentJournal,
{
    pub(crate) catalog: Catalog,
    pub(crate) roster: Roster,
    pub(crate) ledger: EnrollmentLedger,
    pub(crate) journal: TJournal,
}

impl<TJournal> RegistrationSystem<TJournal>
where
    TJournal: EnrollmentJournal,
{
    pub fn new(catalog: Catalog, roster: Roster, journal: TJournal) -> Self {
        Self {
            catalog,
            roster,
            ledger: EnrollmentLedger::new(),
            journal,
        }
    }

    pub fn register(&mut self, command: RegisterStudent) -> Result<(), ApplicationError> {
        handle_register(self, command)
    }

    pub fn drop_course(&mut self, command: DropCourse) -> Result<(), ApplicationError> {
        handle_drop(self, command)
    }

    pub(crate) fn commit(&mut self, events: Vec<EnrollmentEvent>) -> Result<(), ApplicationError> {
        let starting_sequence = self.journal.rows().len() as u64;
        let rows = to_journal_rows(starting_sequence, &events)?;
        self.journal.append(rows)?;
        self.ledger = events
            .into_iter()
            .fold(std::mem::take(&mut self.ledger), evolve);
        Ok(())
    }

    pub fn find_course(&self, code: &str) -> Option<&Course> {
        self.catalog.find_course(code)
    }

    pub fn find_student(&self, student_id: &str) -> Option<&Student> {
        self.roster.find_student(student_id)
    }

    pub fn list_courses(&self) -> &[Course] {
        self.catalog.list_courses()
    }

    pub fn list_students(&self) -> &[Student] {
        self.roster.list_students()
    }

    pub fn available_slots(&self, code: &str) -> Option<u32> {
        self.find_course(code)
            .map(|course| self.ledger.available_slots(course))
    }

    /// Courses the student holds, in registration order. Empty for an unknown student.
    pub fn registered_courses(&self, student_id: &str) -> Vec<&Course> {
        self.ledger
            .courses_of(student_id)
            .filter_map(|code| self.catalog.find_course(code))
            .collect()
    }

    pub fn enrolled_students(&self, code: &str) -> Vec<&Student> {
        self.ledger
            .students_in(code)
            .filter_map(|id| self.roster.find_student(id))
            .collect()
    }

    pub fn ledger(&self) -> &EnrollmentLedger {
        &self.ledger
    }

    pub fn journal(&self) -> &TJournal {
        &self.journal
    }

    /// Rebuild a ledger from the journal payloads alone.
    pub fn replay_journal(&self) -> Result<EnrollmentLedger, JournalError> {
        let events = self
            .journal
            .rows()
            .iter()
            .map(|row| {
                serde_json::from_value::<EnrollmentEvent>(row.payload.clone())
                    .map_err(|e| JournalError::Serialization(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EnrollmentLedger::replay(events))
    }
}
