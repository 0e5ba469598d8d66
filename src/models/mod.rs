//! Output documents and small shared models.

pub mod output;
pub mod stat_source;

pub use output::{
    ErrorDocument, LeagueInfo, LineupPlayer, MatchupDocument, MatchupOutcome, OwnerInfo,
    RecordInfo, StandingEntry, StandingsDocument, TeamSide,
};
pub use stat_source::StatSource;
