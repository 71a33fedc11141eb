// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod core {
    pub mod catalog;
    pub mod enrollment;
    pub mod ports;
    pub mod roster;
}

pub mod application {
    pub mod errors;
    pub mod journal_rows;
    pub mod registration_system;
    pub mod command_handlers {
        pub mod drop_handler;
        pub mod register_handler;
    }
    pub mod query_handlers {
        pub mod course_listing;
    }
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_journal;
    }
    pub mod inbound {
        pub mod console;
        pub mod render;
    }
}

pub mod shell;
