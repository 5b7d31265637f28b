use super::error::GradeError;
use super::letter::LetterGrade;
use serde::Serialize;
use std::fmt::Write;

const MIN_GRADE: f64 = 0.0;
const MAX_GRADE: f64 = 100.0;

/// A student and their grades
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    /// Student identifier, never blank
    id: String,

    name: String,

    department: String,

    /// Grades in entry order, each within 0.0..=100.0
    grades: Vec<f64>,
}

/// A grade taken out by `Student::remove_grade`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemovedGrade {
    /// Position the grade held before removal
    pub index: usize,

    pub value: f64,
}

impl Student {
    /// Create a student with no grades
    ///
    /// Fails with `GradeError::EmptyStudentId` when `id` is empty or whitespace.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Result<Self, GradeError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(GradeError::EmptyStudentId);
        }

        Ok(Self {
            id,
            name: name.into(),
            department: department.into(),
            grades: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    /// Grades in entry order
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Append a grade, rejecting anything outside 0.0..=100.0 (NaN included)
    pub fn add_grade(&mut self, grade: f64) -> Result<(), GradeError> {
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            log::warn!("Rejected grade {} for student {}", grade, self.id);
            return Err(GradeError::OutOfRange(grade));
        }

        self.grades.push(grade);
        log::debug!("Added grade {:?} for student {}", grade, self.id);
        Ok(())
    }

    /// Remove the grade at `index`
    pub fn remove_grade(&mut self, index: usize) -> Result<RemovedGrade, GradeError> {
        if self.grades.is_empty() {
            return Err(GradeError::NoGrades);
        }

        if index >= self.grades.len() {
            return Err(GradeError::IndexOutOfRange {
                index,
                max: self.grades.len() - 1,
            });
        }

        let value = self.grades.remove(index);
        log::debug!(
            "Removed grade {:?} at index {} for student {}",
            value,
            index,
            self.id
        );
        Ok(RemovedGrade { index, value })
    }

    /// Arithmetic mean, or 0.0 with no grades
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    /// Highest grade, or 0.0 with no grades
    pub fn highest_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Lowest grade, or 0.0 with no grades
    pub fn lowest_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn letter_grade(&self) -> LetterGrade {
        if self.grades.is_empty() {
            LetterGrade::NoGrades
        } else {
            LetterGrade::from_average(self.average())
        }
    }

    /// Multi-line summary; statistics are only listed once grades exist
    pub fn student_info(&self) -> String {
        let mut info = String::new();
        let _ = writeln!(info, "STUDENT INFORMATION");
        let _ = writeln!(info, "ID: {}", self.id);
        let _ = writeln!(info, "Name: {}", self.name);
        let _ = writeln!(info, "Department: {}", self.department);
        let _ = writeln!(info, "Grade Count: {}", self.grade_count());

        if self.grades.is_empty() {
            let _ = writeln!(info, "{}", LetterGrade::NoGrades);
        } else {
            let _ = writeln!(info, "Grades: {:?}", self.grades);
            let _ = writeln!(info, "Average: {:.2}", self.average());
            let _ = writeln!(info, "Highest: {:?}", self.highest_grade());
            let _ = writeln!(info, "Lowest: {:?}", self.lowest_grade());
            let _ = writeln!(info, "Letter Grade: {}", self.letter_grade());
        }

        info
    }
}
