use crate::config::seed::SeedCatalog;
use crate::domain::model::{Course, Student};
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::Validate;

/// Owns the canonical course and student stores. Both are keyed by unique
/// string ids and iterate in insertion order. Every mutation that touches
/// an enrollment goes through here, so the two sides (a course's student
/// ids, a student's course codes) stay consistent.
pub struct Registry {
    courses: Vec<Course>,
    students: Vec<Student>,
    legacy_duplicates: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            students: Vec::new(),
            legacy_duplicates: false,
        }
    }

    /// Validates and loads the startup catalog.
    pub fn from_seed(catalog: SeedCatalog) -> Result<Self> {
        catalog.validate()?;
        let mut registry = Self::new();
        for course in catalog.courses {
            registry.add_course(course)?;
        }
        for student in catalog.students {
            registry.add_student(student)?;
        }
        Ok(registry)
    }

    /// When enabled, registering twice for the same course appends a second
    /// entry to both lists instead of failing with `AlreadyRegistered`.
    /// Matches the behavior of the original system.
    pub fn with_legacy_duplicates(mut self, enabled: bool) -> Self {
        self.legacy_duplicates = enabled;
        self
    }

    pub fn add_course(&mut self, course: Course) -> Result<()> {
        if self.course(&course.code).is_ok() {
            return Err(RegistryError::InvalidSeed {
                field: "course.code".to_string(),
                reason: format!("duplicate key: {}", course.code),
            });
        }
        self.courses.push(course);
        Ok(())
    }

    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if self.student(&student.id).is_ok() {
            return Err(RegistryError::InvalidSeed {
                field: "student.id".to_string(),
                reason: format!("duplicate key: {}", student.id),
            });
        }
        self.students.push(student);
        Ok(())
    }

    pub fn course(&self, code: &str) -> Result<&Course> {
        self.courses
            .iter()
            .find(|course| course.code == code)
            .ok_or_else(|| RegistryError::CourseNotFound {
                code: code.to_string(),
            })
    }

    pub fn student(&self, id: &str) -> Result<&Student> {
        self.students
            .iter()
            .find(|student| student.id == id)
            .ok_or_else(|| RegistryError::StudentNotFound { id: id.to_string() })
    }

    /// Courses in insertion order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Students in insertion order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Registers the student into the course and returns the course title.
    /// Both entities are looked up before anything is mutated, so a failed
    /// registration leaves no partial effect.
    pub fn register(&mut self, student_id: &str, course_code: &str) -> Result<String> {
        let student_idx = self.student_index(student_id)?;
        let course_idx = self.course_index(course_code)?;

        let course = &mut self.courses[course_idx];
        let student = &mut self.students[student_idx];

        if !self.legacy_duplicates && student.is_registered(&course.code) {
            return Err(RegistryError::AlreadyRegistered {
                id: student.id.clone(),
                code: course.code.clone(),
            });
        }

        course.enroll(&student.id)?;
        student.add_course(&course.code);

        tracing::debug!(
            student = %student.id,
            course = %course.code,
            slots_left = course.available_slots(),
            "registered"
        );
        Ok(course.title.clone())
    }

    /// Drops the course from the student's registrations and returns the
    /// course title. Fails with `NotRegistered` when the student never
    /// joined; nothing is mutated in that case.
    pub fn drop_course(&mut self, student_id: &str, course_code: &str) -> Result<String> {
        let student_idx = self.student_index(student_id)?;
        let course_idx = self.course_index(course_code)?;

        let course = &mut self.courses[course_idx];
        let student = &mut self.students[student_idx];

        if !student.is_registered(&course.code) {
            return Err(RegistryError::NotRegistered {
                id: student.id.clone(),
                code: course.code.clone(),
            });
        }

        course.withdraw(&student.id);
        student.remove_course(&course.code);

        tracing::debug!(student = %student.id, course = %course.code, "dropped");
        Ok(course.title.clone())
    }

    fn course_index(&self, code: &str) -> Result<usize> {
        self.courses
            .iter()
            .position(|course| course.code == code)
            .ok_or_else(|| RegistryError::CourseNotFound {
                code: code.to_string(),
            })
    }

    fn student_index(&self, id: &str) -> Result<usize> {
        self.students
            .iter()
            .position(|student| student.id == id)
            .ok_or_else(|| RegistryError::StudentNotFound { id: id.to_string() })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
