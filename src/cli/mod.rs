//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser};
use types::{LeagueId, Season};

/// Positional arguments shared by both fetchers, in the order the
/// MagicMirror node helpers pass them.
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// ESPN league ID.
    pub league_id: LeagueId,

    /// Season year (e.g. 2025).
    pub year: Season,

    /// ESPN display name (or part of it) identifying your team.
    pub username: String,
}

/// Print league standings as JSON.
#[derive(Debug, Parser)]
#[clap(
    name = "fantasy-standings",
    about = "Print ESPN fantasy football league standings as JSON",
    version
)]
pub struct StandingsCli {
    #[clap(flatten)]
    pub league: LeagueArgs,
}

/// Print the current week's matchup for one user as JSON.
#[derive(Debug, Parser)]
#[clap(
    name = "fantasy-matchup",
    about = "Print your current ESPN fantasy football matchup as JSON",
    version
)]
pub struct MatchupCli {
    #[clap(flatten)]
    pub league: LeagueArgs,
}
