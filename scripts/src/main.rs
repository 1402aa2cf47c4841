use clap::Parser;
use eyre::Result;
use space_scripts::{cli::Cli, constants::DEFAULT_LOG_FILTER};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let (config, command) = Cli::parse().into_parts();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().pretty().with_env_filter(filter).init();

    command.run(&config).await?;
    Ok(())
}
