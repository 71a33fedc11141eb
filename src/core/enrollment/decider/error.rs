// Rejections a decider can return. Each one means the ledger was left untouched.

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("student is already registered in the course")]
    AlreadyRegistered,

    #[error("course is full")]
    CourseFull,

    #[error("student is not registered in the course")]
    NotRegistered,
}
