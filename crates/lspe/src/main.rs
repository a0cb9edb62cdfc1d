//! LSPDFR Enhanced rank editor - Entry Point
//!
//! Headless validation of rank set snapshots. Exits with status 1 when the
//! reported issues include errors.

use anyhow::Result;
use clap::Parser;
use lspe::cli::{Cli, run};
use lspe_infrastructure::ConfigLoader;
use lspe_infrastructure::logging::init_logging;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    if run(&cli, &config)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
