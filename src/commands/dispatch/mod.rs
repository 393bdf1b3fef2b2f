//! Command dispatch logic for papertrend

use std::time::Instant;

use crate::cli::Cli;
use papertrend_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(
        elapsed = ?start.elapsed(),
        base_url = %ctx.config.api_root(),
        "load_config"
    );

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
