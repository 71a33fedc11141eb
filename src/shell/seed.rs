//! Seed data for the catalog and roster.
//!
//! The seed is either the built-in sample or a JSON file of the shape
//!
//! ```json
//! {
//!   "courses": [{ "code": "CS101", "title": "...", "description": "...", "capacity": 30 }],
//!   "students": [{ "studentId": "1", "name": "..." }]
//! }
//! ```

use crate::core::catalog::{Catalog, CatalogError, Course};
use crate::core::roster::{Roster, RosterError, Student};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("failed to parse seed data: {message}")]
    Parse { message: String },

    #[error("failed to read seed file {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CourseSeed {
    pub code: String,
    pub title: String,
    pub description: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudentSeed {
    pub student_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub courses: Vec<CourseSeed>,
    #[serde(default)]
    pub students: Vec<StudentSeed>,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            courses: vec![
                CourseSeed {
                    code: "CS101".into(),
                    title: "Intro to Computer Science".into(),
                    description: "Basics of CS".into(),
                    capacity: 30,
                },
                CourseSeed {
                    code: "CS102".into(),
                    title: "Data Structures".into(),
                    description: "Learn Data Structures".into(),
                    capacity: 25,
                },
            ],
            students: vec![
                StudentSeed {
                    student_id: "1".into(),
                    name: "Shrinika".into(),
                },
                StudentSeed {
                    student_id: "2".into(),
                    name: "Kashvi".into(),
                },
            ],
        }
    }
}

impl SeedData {
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] if the JSON is malformed or has unknown fields.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        serde_json::from_str(json).map_err(|e| SeedError::Parse {
            message: e.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns [`SeedError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let contents = fs::read_to_string(path).map_err(|e| SeedError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Builds the catalog and roster, rejecting zero capacities and duplicate identifiers.
    pub fn into_catalog_and_roster(self) -> Result<(Catalog, Roster), SeedError> {
        let mut catalog = Catalog::new();
        for course in self.courses {
            catalog.add_course(Course::new(
                course.code,
                course.title,
                course.description,
                course.capacity,
            )?)?;
        }

        let mut roster = Roster::new();
        for student in self.students {
            roster.add_student(Student::new(student.student_id, student.name))?;
        }

        Ok((catalog, roster))
    }
}
