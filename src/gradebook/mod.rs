//! Student grade tracking
//!
//! A `Student` keeps an ordered list of grades on a 0-100 scale and
//! derives average, extremes and a letter grade from it.

mod error;
mod letter;
mod student;

pub use error::GradeError;
pub use letter::LetterGrade;
pub use student::{RemovedGrade, Student};
