//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;

/// Top-level CLI for the roster seed-and-report utility.
///
/// There are no subcommands: running the binary performs the entire
/// workflow (connect, rebuild and seed the schema, report, disconnect).
#[derive(Debug, Parser)]
#[clap(name = "rink-roster", about = "Hockey roster seed-and-report CLI")]
pub struct RinkRoster {
    /// Print progress between stages. Report lines are unaffected.
    #[clap(long)]
    pub verbose: bool,
}
