pub mod cli;
pub mod seed;

pub use cli::CliConfig;
pub use seed::SeedCatalog;
