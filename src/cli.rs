// src/cli.rs
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Aggregate statistics over a directory of JSON deck files.
#[derive(Parser, Debug)]
#[command(
    name = "deckstat",
    version,
    about = "Deck statistics generator",
    long_about = "Parses every .json deck file in DIRECTORY concurrently and prints a \
                  frequency table for ATTRIBUTE, plus an XML report."
)]
pub struct Cli {
    /// Directory containing the JSON deck files (non-recursive)
    pub directory: PathBuf,

    /// Statistics dimension: faction, type, provision, power, leaderAbility,
    /// totalPower, deckFaction, or categories
    pub attribute: String,

    /// Worker pool size (defaults to the config value, normally 4)
    pub threads: Option<NonZeroUsize>,

    /// Directory the XML report is written to (defaults to DIRECTORY)
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Rows shown in the printed top-N table
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Suppress the deck summary block
    #[arg(long, short)]
    pub quiet: bool,
}
