mod cli;
mod commands;

use crate::cli::Cli;
use anyhow::Result;
use clap::Parser;
use packhub::domain::config::{AppConfig, LoggingConfig};
use packhub::kernel::config::load_config;
use packhub_logger::Logger;
use std::io::{self, Write};
use tracing::warn;

const LOGGER: &str = env!("CARGO_PKG_NAME");

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded: Result<AppConfig, _> = load_config(cli.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let init_logger = |logging: &LoggingConfig| Logger::builder().name(LOGGER).from_config(logging).init();
    let (_logger, rejected) = match init_logger(&config.logging) {
        Ok(logger) => (logger, None),
        Err(error) => (init_logger(&LoggingConfig::default())?, Some(error)),
    };

    if let Some(error) = rejected {
        warn!(%error, "Invalid logging configuration, using console defaults");
    }
    if let Err(error) = &loaded {
        warn!(%error, "Falling back to default configuration");
    }

    let mut out = io::stdout().lock();
    commands::run(cli.command, &config, &mut out)?;
    out.flush()?;

    Ok(())
}
