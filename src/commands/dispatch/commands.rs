//! Command implementations for all papertrend commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{paper, recommend, search, trends, watch};
use papertrend_core::error::Result;
use papertrend_core::trace_time;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Trends(args) => trends::execute(ctx, args),
            Commands::Search(args) => search::execute(ctx, args),
            Commands::Paper(args) => paper::execute(ctx, args),
            Commands::Recommend(args) => recommend::execute(ctx, args),
            Commands::Watch(args) => watch::execute(ctx, args),
        };
        trace_time!(ctx.start, "execute_command");
        result
    }
}
