use crate::domain::model::Student;
use crate::domain::ports::RosterStore;
use crate::utils::error::{Result, RosterError};
use std::collections::HashMap;

/// In-memory roster keyed by class name.
///
/// A class key is created by the first add and never removed afterwards, so a
/// class that has lost all of its students still answers with an empty list
/// rather than `ClassNotFound`. Students keep insertion order within a class,
/// and removal takes exactly the first case-insensitive name match.
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    classes: HashMap<String, Vec<Student>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RosterStore for InMemoryRoster {
    fn add_student(&mut self, class_name: &str, student: Student) {
        tracing::debug!(
            "Adding {} (age {}) to class {}",
            student.name,
            student.age,
            class_name
        );
        self.classes
            .entry(class_name.to_string())
            .or_default()
            .push(student);
    }

    fn students_by_class(&self, class_name: &str) -> Result<&[Student]> {
        self.classes
            .get(class_name)
            .map(Vec::as_slice)
            .ok_or_else(|| RosterError::ClassNotFound {
                class: class_name.to_string(),
            })
    }

    fn student_by_name(&self, class_name: &str, student_name: &str) -> Result<&Student> {
        let students = self.students_by_class(class_name)?;

        let needle = student_name.to_lowercase();
        students
            .iter()
            .find(|s| s.name.to_lowercase() == needle)
            .ok_or_else(|| RosterError::StudentNotFound {
                class: class_name.to_string(),
                name: student_name.to_string(),
            })
    }

    fn remove_student(&mut self, class_name: &str, student_name: &str) -> Result<Student> {
        let students =
            self.classes
                .get_mut(class_name)
                .ok_or_else(|| RosterError::ClassNotFound {
                    class: class_name.to_string(),
                })?;

        // 只移除第一個匹配的學生，後面的同名學生保持原位
        let needle = student_name.to_lowercase();
        let index = students
            .iter()
            .position(|s| s.name.to_lowercase() == needle)
            .ok_or_else(|| RosterError::StudentNotFound {
                class: class_name.to_string(),
                name: student_name.to_string(),
            })?;

        let removed = students.remove(index);
        tracing::debug!("Removed {} from class {}", removed.name, class_name);
        Ok(removed)
    }
}
