//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;

/// Default file the report is written to.
pub const DEFAULT_OUTPUT_FILE: &str = "output.yaml";

/// Rank professional Dota 2 teams by the combined experience of their players.
///
/// Experience is the number of seconds since OpenDota started tracking each player's full
/// match history. Only the `--num-teams` lowest team ids are fetched and ranked.
#[derive(Debug, Parser)]
#[clap(name = "top-teams", about = "A CLI that gets the top N pro Dota teams", version)]
pub struct TopTeamsCli {
    /// Number of teams to fetch.
    #[clap(long, short = 'n', default_value_t = 5)]
    pub num_teams: usize,

    /// Output file location.
    #[clap(long, short = 'o', default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Write JSON instead of YAML.
    #[clap(long)]
    pub json: bool,

    /// OpenDota API base URL (or set `OPENDOTA_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Compute experience as of this RFC 3339 instant instead of now.
    #[clap(long)]
    pub as_of: Option<DateTime<Utc>>,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, short)]
    pub verbose: bool,
}
