use crate::domain::model::{SessionSummary, Student};
use crate::domain::ports::RosterStore;
use crate::utils::error::Result;
use crate::utils::monitor::SessionMonitor;
use crate::utils::validation;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Remove,
    View,
    ViewDetails,
    Exit,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "view" => Some(Self::View),
            "view details" => Some(Self::ViewDetails),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Remove => "Remove",
            Self::View => "View",
            Self::ViewDetails => "View Details",
            Self::Exit => "Exit",
        }
    }
}

/// Console boundary around a [`RosterStore`]: prompts for commands, checks
/// the free-text input and dispatches the four store operations. Generic
/// over the reader and writer so whole sessions can be scripted in tests.
pub struct MenuSession<S: RosterStore, In: BufRead, Out: Write> {
    store: S,
    input: In,
    output: Out,
    monitor: SessionMonitor,
    summary: SessionSummary,
}

impl<S: RosterStore, In: BufRead, Out: Write> MenuSession<S, In, Out> {
    pub fn new(store: S, input: In, output: Out) -> Self {
        Self::new_with_monitoring(store, input, output, false)
    }

    pub fn new_with_monitoring(store: S, input: In, output: Out, monitor_enabled: bool) -> Self {
        Self {
            store,
            input,
            output,
            monitor: SessionMonitor::new(monitor_enabled),
            summary: SessionSummary::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn output(&self) -> &Out {
        &self.output
    }

    /// Runs the menu loop until `exit` or end of input. Store errors are
    /// printed and never end the loop; only reader/writer failures do.
    pub fn run(&mut self) -> Result<SessionSummary> {
        writeln!(self.output, "Welcome to the Student Management Console")?;
        writeln!(self.output)?;
        writeln!(self.output, "Options: Add, Remove, View, View Details, Exit")?;

        loop {
            let Some(choice) = self.prompt("\nEnter your choice: ")? else {
                // 輸入結束時視同 exit
                tracing::debug!("Input closed, ending session");
                break;
            };

            let Some(command) = MenuCommand::parse(&choice) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            tracing::debug!("Handling command: {}", command.label());

            match command {
                MenuCommand::Add => self.handle_add()?,
                MenuCommand::Remove => self.handle_remove()?,
                MenuCommand::View => self.handle_view()?,
                MenuCommand::ViewDetails => self.handle_view_details()?,
                MenuCommand::Exit => {
                    writeln!(self.output, "Exiting... Goodbye!")?;
                    break;
                }
            }

            self.summary.commands_processed += 1;
            self.monitor.log_stats(command.label());
        }

        self.monitor.log_final_stats();
        Ok(self.summary.clone())
    }

    fn handle_add(&mut self) -> Result<()> {
        let Some(class_name) = self.prompt_required("Enter class name (e.g., A1): ", "class name")?
        else {
            return Ok(());
        };

        let Some(student_name) = self.prompt_required("Enter student name: ", "student name")?
        else {
            return Ok(());
        };

        let Some(age_input) = self.prompt("Enter student age: ")? else {
            return Ok(());
        };
        let age = match validation::parse_age("student age", &age_input) {
            Ok(age) => age,
            Err(e) => {
                // 年齡無效時中止新增，不改動存儲
                writeln!(self.output, "❌ {}", e)?;
                return Ok(());
            }
        };

        self.store
            .add_student(&class_name, Student::new(student_name, age));
        self.summary.students_added += 1;
        writeln!(self.output, "✅ Student added successfully!")?;
        Ok(())
    }

    fn handle_remove(&mut self) -> Result<()> {
        let Some(class_name) = self.prompt_required("Enter class name (e.g., A1): ", "class name")?
        else {
            return Ok(());
        };

        let Some(student_name) =
            self.prompt_required("Enter student name to remove: ", "student name")?
        else {
            return Ok(());
        };

        match self.store.remove_student(&class_name, &student_name) {
            Ok(removed) => {
                self.summary.students_removed += 1;
                writeln!(
                    self.output,
                    "✅ Removed {}, Age: {} from {} class",
                    removed.name, removed.age, class_name
                )?;
            }
            Err(e) => writeln!(self.output, "❌ {}", e)?,
        }
        Ok(())
    }

    fn handle_view(&mut self) -> Result<()> {
        let Some(class_name) = self.prompt_required("Enter class name (e.g., A1): ", "class name")?
        else {
            return Ok(());
        };

        match self.store.students_by_class(&class_name) {
            Ok(students) if students.is_empty() => {
                writeln!(self.output, "No students found in this class.")?;
            }
            Ok(students) => {
                writeln!(self.output, "Students in {}:", class_name)?;
                for student in students {
                    writeln!(self.output, "- {}, Age: {}", student.name, student.age)?;
                }
            }
            Err(e) => writeln!(self.output, "❌ {}", e)?,
        }
        Ok(())
    }

    fn handle_view_details(&mut self) -> Result<()> {
        let Some(class_name) = self.prompt_required("Enter class name (e.g., A1): ", "class name")?
        else {
            return Ok(());
        };

        let Some(student_name) = self.prompt_required("Enter student name: ", "student name")?
        else {
            return Ok(());
        };

        match self.store.student_by_name(&class_name, &student_name) {
            Ok(student) => {
                writeln!(
                    self.output,
                    "Student Details: {}, Age: {}",
                    student.name, student.age
                )?;
            }
            Err(e) => writeln!(self.output, "❌ {}", e)?,
        }
        Ok(())
    }

    /// Writes the prompt label and reads one trimmed line. `None` means the
    /// input reached end of file.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts for a value that must be non-empty; prints the invalid-input
    /// message and yields `None` when the check fails or input ends.
    fn prompt_required(&mut self, label: &str, field: &str) -> Result<Option<String>> {
        let Some(value) = self.prompt(label)? else {
            return Ok(None);
        };

        if let Err(e) = validation::require_non_empty(field, &value) {
            writeln!(self.output, "❌ {}", e)?;
            return Ok(None);
        }
        Ok(Some(value))
    }
}
