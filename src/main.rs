use anyhow::Context;
use clap::Parser;
use course_registry::utils::logger;
use course_registry::{CliConfig, Registry, SeedCatalog, Session};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let mut registry = Registry::from_seed(SeedCatalog::default())
        .context("failed to load the startup catalog")?
        .with_legacy_duplicates(config.legacy_duplicates);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&mut registry, stdin.lock(), stdout.lock());
    session.run().context("session ended with an IO failure")?;

    tracing::debug!("session ended");
    Ok(())
}
