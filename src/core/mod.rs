pub mod registry;
pub mod session;

pub use crate::domain::model::{Course, Student};
pub use crate::utils::error::Result;
pub use registry::Registry;
pub use session::{MenuChoice, Session};
