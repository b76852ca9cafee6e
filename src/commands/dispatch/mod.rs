//! Command dispatch logic for graphwalk

use std::time::Instant;

use crate::cli::Cli;
use graphwalk_core::config::AppConfig;
use graphwalk_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = AppConfig::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
