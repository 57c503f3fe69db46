use crate::utils::error::{RegistryError, Result};
use std::fmt;

/// A course offering with a fixed capacity. Enrollment order is preserved;
/// the enrolled list never grows past `capacity`.
#[derive(Debug, Clone)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub description: String,
    pub capacity: u32,
    pub schedule: String,
    enrolled: Vec<String>,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        capacity: u32,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            description: description.into(),
            capacity,
            schedule: schedule.into(),
            enrolled: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.enrolled.len() as u32 >= self.capacity
    }

    pub fn available_slots(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled.len() as u32)
    }

    /// Student ids in registration order.
    pub fn enrolled_students(&self) -> &[String] {
        &self.enrolled
    }

    pub fn has_student(&self, student_id: &str) -> bool {
        self.enrolled.iter().any(|id| id == student_id)
    }

    /// Appends the student id, refusing when the course is at capacity.
    /// Does not check for duplicates; the registry owns that policy.
    pub fn enroll(&mut self, student_id: &str) -> Result<()> {
        if self.is_full() {
            return Err(RegistryError::CourseFull {
                code: self.code.clone(),
            });
        }
        self.enrolled.push(student_id.to_string());
        Ok(())
    }

    /// Removes the first occurrence of the student id; no-op when absent.
    pub fn withdraw(&mut self, student_id: &str) {
        if let Some(pos) = self.enrolled.iter().position(|id| id == student_id) {
            self.enrolled.remove(pos);
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course Code: {}\nTitle: {}\nDescription: {}\nCapacity: {}\nSchedule: {}\nAvailable Slots: {}",
            self.code,
            self.title,
            self.description,
            self.capacity,
            self.schedule,
            self.available_slots()
        )
    }
}

/// A student and the codes of the courses they are registered in, in
/// registration order. Codes are stable handles; entity instances live in
/// the registry's stores only.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: String,
    pub name: String,
    registered: Vec<String>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            registered: Vec::new(),
        }
    }

    /// Course codes in registration order.
    pub fn registered_courses(&self) -> &[String] {
        &self.registered
    }

    pub fn is_registered(&self, course_code: &str) -> bool {
        self.registered.iter().any(|code| code == course_code)
    }

    pub fn add_course(&mut self, course_code: &str) {
        self.registered.push(course_code.to_string());
    }

    /// Removes the first occurrence of the course code; no-op when absent.
    pub fn remove_course(&mut self, course_code: &str) {
        if let Some(pos) = self.registered.iter().position(|code| code == course_code) {
            self.registered.remove(pos);
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student ID: {}\nName: {}\nRegistered Courses: [{}]",
            self.id,
            self.name,
            self.registered.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_capacity_enforced() {
        let mut course = Course::new("CS101", "Intro", "Basics", 2, "Mon 10-12");
        course.enroll("S001").unwrap();
        course.enroll("S002").unwrap();
        assert!(course.is_full());
        assert_eq!(course.available_slots(), 0);

        let err = course.enroll("S003").unwrap_err();
        assert!(matches!(err, RegistryError::CourseFull { .. }));
        assert_eq!(course.enrolled_students().len(), 2);
    }

    #[test]
    fn test_course_withdraw_removes_first_occurrence() {
        let mut course = Course::new("CS101", "Intro", "Basics", 5, "Mon 10-12");
        course.enroll("S001").unwrap();
        course.enroll("S002").unwrap();
        course.withdraw("S001");
        assert_eq!(course.enrolled_students(), ["S002"]);

        // absent id is a silent no-op
        course.withdraw("S999");
        assert_eq!(course.enrolled_students(), ["S002"]);
    }

    #[test]
    fn test_course_display_shows_available_slots() {
        let mut course = Course::new(
            "ENG101",
            "English Literature",
            "Study of English literature",
            20,
            "Wed 10-12",
        );
        course.enroll("S001").unwrap();
        let rendered = course.to_string();
        assert!(rendered.contains("Course Code: ENG101"));
        assert!(rendered.contains("Available Slots: 19"));
    }

    #[test]
    fn test_student_registration_order_preserved() {
        let mut student = Student::new("S001", "Alice");
        student.add_course("MATH101");
        student.add_course("CS101");
        assert_eq!(student.registered_courses(), ["MATH101", "CS101"]);
        assert!(student.is_registered("CS101"));
        assert!(!student.is_registered("ENG101"));

        student.remove_course("MATH101");
        assert_eq!(student.registered_courses(), ["CS101"]);
    }
}
