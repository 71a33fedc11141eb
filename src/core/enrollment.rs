// This module groups the enrollment relationship between students and courses.
//
// Structure
// - state.rs: the ledger, the single owner of every (student, course) pair
// - event.rs + event/: root event enum and versioned payloads
// - evolve.rs: pure state transitions
// - decider/: pure decision logic per command intent
//
// Invariants
// - A course appears in a student's registrations exactly when the student appears in the course's
//   enrollment. Both are views over the same ledger, never two lists kept in step by hand.
// - The number of pairs for a course never exceeds its capacity. The register decider enforces it.

pub mod event;
pub mod evolve;
pub mod state;
pub mod decider {
    pub mod error;
    pub mod register {
        pub mod command;
        pub mod decide;
    }
    pub mod drop_course {
        pub mod command;
        pub mod decide;
    }
}
