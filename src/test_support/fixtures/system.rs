use crate::adapters::in_memory::in_memory_journal::InMemoryJournal;
use crate::application::registration_system::RegistrationSystem;
use crate::core::catalog::{Catalog, Course};
use crate::core::roster::{Roster, Student};

/// CS101 and CS102 with the given capacity each, students "1" Shrinika and "2" Kashvi.
pub fn make_system(capacity: u32) -> RegistrationSystem<InMemoryJournal> {
    let mut catalog = Catalog::new();
    catalog
        .add_course(Course::new("CS101", "Intro to Computer Science", "Basics of CS", capacity).unwrap())
        .unwrap();
    catalog
        .add_course(Course::new("CS102", "Data Structures", "Learn Data Structures", capacity).unwrap())
        .unwrap();

    let mut roster = Roster::new();
    roster.add_student(Student::new("1", "Shrinika")).unwrap();
    roster.add_student(Student::new("2", "Kashvi")).unwrap();

    RegistrationSystem::new(catalog, roster, InMemoryJournal::new())
}
