use anyhow::Context;
use clap::Parser;
use counter_doer::core::runner;
use counter_doer::utils::{logger, validation::Validate};
use counter_doer::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting counter-doer");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = cli.resolve().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let performed = runner::run(&config)
        .await
        .with_context(|| format!("Run failed in {:?} mode", config.mode))?;

    println!("✅ Done ({:?} mode, {} doer calls)", config.mode, performed);
    Ok(())
}
