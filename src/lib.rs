pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, SeedCatalog};
pub use crate::core::{MenuChoice, Registry, Session};
pub use domain::model::{Course, Student};
pub use utils::error::{RegistryError, Result};
