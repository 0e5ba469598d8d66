//! JSON documents printed for the MagicMirror modules.
//!
//! Optional values serialize as `null` rather than being skipped so the
//! widgets always see the same keys.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::{PlayerId, TeamId, Week};

#[derive(Debug, Clone, Serialize)]
pub struct StandingsDocument {
    pub league_info: LeagueInfo,
    pub standings: Vec<StandingEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueInfo {
    pub name: String,
    /// Number of teams
    pub size: usize,
    pub current_week: Week,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StandingEntry {
    pub rank: u32,
    pub team_name: String,
    pub owner_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Rounded to one decimal place
    pub points_for: f64,
    /// Rounded to one decimal place
    pub points_against: f64,
    pub logo_url: Option<String>,
    pub playoff_pct: f64,
    pub is_your_team: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchupDocument {
    pub week: Week,
    pub timestamp: DateTime<Local>,
    pub matchup_type: String,
    pub is_playoff: bool,
    pub your_team: TeamSide,
    pub opponent: TeamSide,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamSide {
    pub name: String,
    pub owner: OwnerInfo,
    pub record: RecordInfo,
    pub logo_url: Option<String>,
    pub team_abbrev: String,
    pub team_id: TeamId,
    pub standing: u32,
    pub score: f64,
    pub projected: f64,
    pub points_for: f64,
    pub points_against: f64,
    pub lineup: Vec<LineupPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerInfo {
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecordInfo {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineupPlayer {
    pub name: String,
    pub position: String,
    pub slot_position: String,
    pub pro_team: String,
    pub pro_opponent: String,
    pub points: f64,
    pub projected_points: f64,
    pub game_played: u8,
    pub game_date: Option<DateTime<Utc>>,
    pub injured: bool,
    pub injury_status: Option<String>,
    pub active_status: String,
    pub on_bye_week: bool,
    pub player_id: PlayerId,
}

/// `{"error": "..."}` payload handed to the widget instead of a crash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDocument {
    pub error: String,
}

impl ErrorDocument {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// What the matchup fetcher prints: the matchup, or an embedded error.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MatchupOutcome {
    Matchup(Box<MatchupDocument>),
    Error(ErrorDocument),
}

impl MatchupOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, MatchupOutcome::Error(_))
    }
}
