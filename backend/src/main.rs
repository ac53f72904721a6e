use std::io;

use shared::LedgerConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the transcript
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = LedgerConfig::default();
    info!("Running ledger demo with {:?}", config);

    let stdout = io::stdout();
    bank_ledger::demo::run(stdout.lock(), config)?;

    Ok(())
}
