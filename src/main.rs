use clap::Parser;
use tracing_subscriber::EnvFilter;

use addrtree::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
    tracing::debug!(command = ?cli.command, "addrtree started");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    addrtree::run(&cli, &mut out)
}
