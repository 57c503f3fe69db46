use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Student not found: {id}")]
    StudentNotFound { id: String },

    #[error("Course not found: {code}")]
    CourseNotFound { code: String },

    #[error("Cannot register, the course is full: {code}")]
    CourseFull { code: String },

    #[error("Student {id} is not registered in course {code}")]
    NotRegistered { id: String, code: String },

    #[error("Student {id} is already registered in course {code}")]
    AlreadyRegistered { id: String, code: String },

    #[error("Invalid choice: {input}")]
    InvalidMenuChoice { input: String },

    #[error("Invalid seed data for {field}: {reason}")]
    InvalidSeed { field: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    /// Operation failures the menu loop reports and recovers from, as
    /// opposed to startup or IO failures that end the process.
    pub fn is_user_recoverable(&self) -> bool {
        !matches!(
            self,
            RegistryError::Io(_) | RegistryError::InvalidSeed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
