use course_registration::adapters::inbound::console::Console;
use course_registration::core::ports::EnrollmentJournal;
use course_registration::shell::{build_system, config::AppConfig, init_tracing, load_seed};
use tokio::io::{BufReader, stdin, stdout};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    init_tracing(&config)?;

    let mut system = build_system(load_seed(&config)?)?;

    let mut console = Console::new(BufReader::new(stdin()), stdout());
    console.run(&mut system).await?;

    tracing::info!(journal_rows = system.journal().rows().len(), "session finished");
    Ok(())
}
