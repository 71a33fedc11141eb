use crate::core::enrollment::decider::error::DecideError;
use crate::core::ports::JournalError;
use thiserror::Error;

/// Every outcome here is expected and recoverable. None of them leaves partial state behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("student not found: {0}")]
    StudentNotFound(String),

    #[error("course not found: {0}")]
    CourseNotFound(String),

    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Journal(#[from] JournalError),
}
