//! Command implementations for all graphwalk commands

use tracing::debug;

use crate::cli::{Commands, LadderArgs, PathsArgs};
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use graphwalk_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Paths(args) => execute_paths(ctx, args),
            Commands::Ladder(args) => execute_ladder(ctx, args),
        };
        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}

fn execute_paths(ctx: &CommandContext, args: &PathsArgs) -> Result<()> {
    commands::paths::execute(ctx, args)
}

fn execute_ladder(ctx: &CommandContext, args: &LadderArgs) -> Result<()> {
    commands::ladder::execute(ctx, args)
}
