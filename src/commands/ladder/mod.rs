//! `graphwalk ladder`: shortest word ladder between two words

mod output;

use tracing::debug;

use crate::cli::{LadderArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use graphwalk_core::error::Result;
use graphwalk_core::ladder::{find_shortest_ladder, load_dictionary, Ladder, LadderError};

/// What a ladder run produced, ready for rendering
pub struct LadderReport<'a> {
    pub begin: &'a str,
    pub end: &'a str,
    pub dictionary_size: usize,
    pub ladder: Ladder,
    pub rejection: Option<LadderError>,
}

/// Execute the ladder command
///
/// A refused search (identical words, end word missing) is reported and
/// treated as "no ladder"; it does not fail the command.
pub fn execute(ctx: &CommandContext, args: &LadderArgs) -> Result<()> {
    let dictionary_path = args
        .dictionary
        .as_deref()
        .unwrap_or(&ctx.config.ladder.dictionary);
    let (begin, end) = match (&args.begin, &args.end) {
        (Some(begin), Some(end)) => (begin.as_str(), end.as_str()),
        _ => (
            ctx.config.ladder.begin.as_str(),
            ctx.config.ladder.end.as_str(),
        ),
    };

    let dictionary = load_dictionary(dictionary_path)?;
    debug!(elapsed = ?ctx.start.elapsed(), words = dictionary.len(), "load_dictionary");

    let (ladder, rejection) = match find_shortest_ladder(begin, end, &dictionary) {
        Ok(ladder) => (ladder, None),
        Err(err) => {
            debug!(reason = err.error_type(), "ladder_search_refused");
            (Ladder::default(), Some(err))
        }
    };
    debug!(elapsed = ?ctx.start.elapsed(), found = !ladder.is_empty(), "find_ladder");

    let report = LadderReport {
        begin,
        end,
        dictionary_size: dictionary.len(),
        ladder,
        rejection,
    };

    if let Some(err) = &report.rejection {
        if ctx.cli.format != OutputFormat::Json && !ctx.cli.quiet {
            eprintln!("{}", err);
        }
    }

    match ctx.cli.format {
        OutputFormat::Human => output::output_human(&report),
        OutputFormat::Json => output::output_json(&report)?,
        OutputFormat::Records => output::output_records(&report),
    }

    Ok(())
}
