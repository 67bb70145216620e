use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub age: u32,
}

impl Student {
    pub fn new(name: String, age: u32) -> Self {
        Self { name, age }
    }
}

/// Totals for one menu session, returned by the run loop.
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    pub commands_processed: usize,
    pub students_added: usize,
    pub students_removed: usize,
}
