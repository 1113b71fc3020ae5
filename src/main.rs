#![allow(missing_docs)]

use std::process::ExitCode;

use anyhow::Context;
use docset_builder::application::DocsetCreator;
use docset_builder::infrastructure::{BuildConfig, init_logging_with_config};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match BuildConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging_with_config(&config.logging) {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to create docset: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &BuildConfig) -> anyhow::Result<()> {
    let creator = DocsetCreator::from_config(config).context("Invalid docset settings")?;
    creator.make_docset().await?;
    Ok(())
}
