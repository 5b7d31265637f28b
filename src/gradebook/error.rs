use thiserror::Error;

/// Errors returned by student construction and grade mutations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    #[error("student ID cannot be empty")]
    EmptyStudentId,

    #[error("grade {0} must be between 0.0 and 100.0")]
    OutOfRange(f64),

    #[error("no grades to remove")]
    NoGrades,

    #[error("invalid index {index}, available range: 0 to {max}")]
    IndexOutOfRange { index: usize, max: usize },
}
