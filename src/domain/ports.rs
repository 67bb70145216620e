use crate::domain::model::Student;
use crate::utils::error::Result;

/// The one store interface the menu layer talks to. Students live in a
/// per-class ordered sequence; name matching is case-insensitive.
pub trait RosterStore {
    /// Appends the student to the class, creating the class entry if absent.
    fn add_student(&mut self, class_name: &str, student: Student);

    /// All students of the class in insertion order, or `ClassNotFound`.
    fn students_by_class(&self, class_name: &str) -> Result<&[Student]>;

    /// The first student in insertion order whose name matches
    /// case-insensitively, or `ClassNotFound` / `StudentNotFound`.
    fn student_by_name(&self, class_name: &str, student_name: &str) -> Result<&Student>;

    /// Removes and returns the first case-insensitive name match. Later
    /// duplicates stay untouched; no mutation on error.
    fn remove_student(&mut self, class_name: &str, student_name: &str) -> Result<Student>;
}
