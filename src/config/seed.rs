use crate::domain::model::{Course, Student};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty, validate_positive, validate_unique_keys, Validate,
};

/// The fixed courses and students loaded at startup. There is no
/// persistence; every run starts from this catalog.
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self {
            courses: vec![
                Course::new(
                    "CS101",
                    "Introduction to Computer Science",
                    "Basics of computer science",
                    30,
                    "Mon 10-12",
                ),
                Course::new(
                    "MATH101",
                    "Calculus I",
                    "Introduction to calculus",
                    25,
                    "Tue 10-12",
                ),
                Course::new(
                    "ENG101",
                    "English Literature",
                    "Study of English literature",
                    20,
                    "Wed 10-12",
                ),
            ],
            students: vec![
                Student::new("S001", "Alice"),
                Student::new("S002", "Bob"),
                Student::new("S003", "Charlie"),
            ],
        }
    }
}

impl Validate for SeedCatalog {
    fn validate(&self) -> Result<()> {
        for course in &self.courses {
            validate_non_empty("course.code", &course.code)?;
            validate_positive("course.capacity", course.capacity)?;
        }
        for student in &self.students {
            validate_non_empty("student.id", &student.id)?;
        }
        validate_unique_keys("course.code", self.courses.iter().map(|c| c.code.as_str()))?;
        validate_unique_keys("student.id", self.students.iter().map(|s| s.id.as_str()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = SeedCatalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.courses.len(), 3);
        assert_eq!(catalog.students.len(), 3);
    }

    #[test]
    fn test_duplicate_course_code_rejected() {
        let mut catalog = SeedCatalog::default();
        catalog
            .courses
            .push(Course::new("CS101", "Copy", "Copy", 10, "Fri 10-12"));
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut catalog = SeedCatalog::default();
        catalog
            .courses
            .push(Course::new("PHY101", "Physics I", "Mechanics", 0, "Thu 10-12"));
        assert!(catalog.validate().is_err());
    }
}
