use crate::core::registry::Registry;
use crate::utils::error::{RegistryError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListCourses,
    Register,
    Drop,
    ListStudents,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::ListCourses),
            "2" => Ok(MenuChoice::Register),
            "3" => Ok(MenuChoice::Drop),
            "4" => Ok(MenuChoice::ListStudents),
            "5" => Ok(MenuChoice::Exit),
            other => Err(RegistryError::InvalidMenuChoice {
                input: other.to_string(),
            }),
        }
    }
}

/// The interactive menu loop. Reads one line per prompt, dispatches to the
/// registry, prints the outcome, and loops until the exit choice or EOF.
/// Generic over the reader and writer so tests can script a whole session.
pub struct Session<'a, R, W> {
    registry: &'a mut Registry,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(registry: &'a mut Registry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Runs the loop to completion. Only IO failures escape; every
    /// operation-level failure is printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::ListCourses) => self.list_courses()?,
                Ok(MenuChoice::Register) => self.register()?,
                Ok(MenuChoice::Drop) => self.drop_course()?,
                Ok(MenuChoice::ListStudents) => self.list_students()?,
                Ok(MenuChoice::Exit) => break,
                Err(_) => {
                    tracing::warn!(input = %line.trim(), "unrecognized menu choice");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nCourse Management System")?;
        writeln!(self.output, "1. Display Courses")?;
        writeln!(self.output, "2. Register for a Course")?;
        writeln!(self.output, "3. Drop a Course")?;
        writeln!(self.output, "4. Display Students")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line, `None` on EOF. Trailing newline is stripped.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn list_courses(&mut self) -> Result<()> {
        writeln!(self.output, "\nAvailable Courses:")?;
        for course in self.registry.courses() {
            writeln!(self.output, "{}\n", course)?;
        }
        Ok(())
    }

    fn list_students(&mut self) -> Result<()> {
        writeln!(self.output, "\nRegistered Students:")?;
        for student in self.registry.students() {
            writeln!(self.output, "{}\n", student)?;
        }
        Ok(())
    }

    fn register(&mut self) -> Result<()> {
        let Some((student_id, course_code)) = self.prompt_enrollment_keys()? else {
            return Ok(());
        };
        match self.registry.register(&student_id, &course_code) {
            Ok(title) => {
                writeln!(self.output, "Successfully registered for the course: {}", title)?;
            }
            Err(err) => self.report_failure(err)?,
        }
        Ok(())
    }

    fn drop_course(&mut self) -> Result<()> {
        let Some((student_id, course_code)) = self.prompt_enrollment_keys()? else {
            return Ok(());
        };
        match self.registry.drop_course(&student_id, &course_code) {
            Ok(title) => {
                writeln!(self.output, "Successfully dropped the course: {}", title)?;
            }
            Err(err) => self.report_failure(err)?,
        }
        Ok(())
    }

    /// Prompts for the student id and course code. `None` when the input
    /// ends mid-operation; the caller aborts and the main loop sees EOF.
    fn prompt_enrollment_keys(&mut self) -> Result<Option<(String, String)>> {
        let Some(student_id) = self.prompt("\nEnter Student ID: ")? else {
            return Ok(None);
        };
        let Some(course_code) = self.prompt("Enter Course Code: ")? else {
            return Ok(None);
        };
        Ok(Some((student_id, course_code)))
    }

    fn report_failure(&mut self, err: RegistryError) -> Result<()> {
        if !err.is_user_recoverable() {
            return Err(err);
        }
        tracing::warn!(%err, "operation failed");
        writeln!(self.output, "{}", err)?;
        Ok(())
    }
}
