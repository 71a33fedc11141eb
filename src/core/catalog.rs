// Course catalog.
//
// Purpose
// - Own the set of courses on offer and answer lookups by course code.
//
// Responsibilities
// - Keep courses in insertion order so listings are deterministic.
// - Reject duplicate codes and zero capacities at setup time.
//
// Boundaries
// - The catalog does not know who is enrolled. Enrollment lives in the ledger (core::enrollment).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("course {0} must have a capacity of at least one seat")]
    ZeroCapacity(String),

    #[error("course code {0} is already in the catalog")]
    DuplicateCode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub description: String,
    pub capacity: u32,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        capacity: u32,
    ) -> Result<Self, CatalogError> {
        let code = code.into();
        if capacity == 0 {
            return Err(CatalogError::ZeroCapacity(code));
        }
        Ok(Self {
            code,
            title: title.into(),
            description: description.into(),
            capacity,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_course(&mut self, course: Course) -> Result<(), CatalogError> {
        if self.find_course(&course.code).is_some() {
            return Err(CatalogError::DuplicateCode(course.code));
        }
        self.courses.push(course);
        Ok(())
    }

    /// Exact-match lookup. Codes are compared as given, without case folding.
    pub fn find_course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.code == code)
    }

    pub fn list_courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
