// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Load seed data and instantiate the in memory journal.
// - Wire everything into the registration system used by the console.

pub mod config;
pub mod seed;

use crate::adapters::in_memory::in_memory_journal::InMemoryJournal;
use crate::application::registration_system::RegistrationSystem;
use anyhow::Context;
use self::config::AppConfig;
use self::seed::SeedData;
use tracing_subscriber::{EnvFilter, fmt};

pub fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}

pub fn load_seed(config: &AppConfig) -> anyhow::Result<SeedData> {
    match &config.seed_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading seed file");
            SeedData::from_file(path).context("could not load seed data")
        }
        None => Ok(SeedData::default()),
    }
}

pub fn build_system(seed: SeedData) -> anyhow::Result<RegistrationSystem<InMemoryJournal>> {
    let (catalog, roster) = seed
        .into_catalog_and_roster()
        .context("seed data is inconsistent")?;
    tracing::info!(
        courses = catalog.len(),
        students = roster.list_students().len(),
        "registration system ready"
    );
    Ok(RegistrationSystem::new(catalog, roster, InMemoryJournal::new()))
}
