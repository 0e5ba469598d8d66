//! Raw ESPN payload shapes.
//!
//! Every optional upstream field is read through `#[serde(default)]` so a
//! missing key becomes a named default instead of a parse failure.

use serde::{de::Error, Deserialize, Deserializer};
use std::collections::BTreeMap;


fn de_str_key_map_u16_vec<'de, D>(deserializer: D) -> Result<BTreeMap<u16, Vec<u16>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Vec<u16>> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(k, v)| k.parse::<u16>().map(|kk| (kk, v)).map_err(D::Error::custom))
        .collect()
}

/// Envelope for `/segments/0/leagues/{id}` with the league views.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueResponse {
    #[serde(default)]
    pub id: u32,
    #[serde(rename = "seasonId", default)]
    pub season_id: u16,
    #[serde(rename = "scoringPeriodId", default)]
    pub scoring_period_id: u16,
    #[serde(default)]
    pub status: LeagueStatus,
    #[serde(default)]
    pub settings: LeagueSettings,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub teams: Vec<RawTeam>,
    #[serde(default)]
    pub schedule: Vec<RawMatchup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueStatus {
    #[serde(rename = "currentMatchupPeriod", default)]
    pub current_matchup_period: u16,
    #[serde(rename = "finalScoringPeriod", default)]
    pub final_scoring_period: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "scheduleSettings", default)]
    pub schedule_settings: ScheduleSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleSettings {
    /// Matchup period id → scoring period ids it spans (keys come in as strings)
    #[serde(
        rename = "matchupPeriods",
        deserialize_with = "de_str_key_map_u16_vec",
        default
    )]
    pub matchup_periods: BTreeMap<u16, Vec<u16>>,
}

/// League member; team `owners` reference these by `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTeam {
    pub id: u32,
    #[serde(default)]
    pub abbrev: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub record: TeamRecord,
    #[serde(rename = "playoffSeed", default)]
    pub playoff_seed: u32,
    #[serde(rename = "rankCalculatedFinal", default)]
    pub rank_calculated_final: u32,
    #[serde(rename = "currentSimulationResults", default)]
    pub current_simulation_results: Option<SimulationResults>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub overall: RecordLine,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordLine {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(rename = "pointsFor", default)]
    pub points_for: f64,
    #[serde(rename = "pointsAgainst", default)]
    pub points_against: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationResults {
    /// Fraction in `0.0..=1.0`
    #[serde(rename = "playoffPct", default)]
    pub playoff_pct: Option<f64>,
}

/// One `schedule` entry: a head-to-head pairing for a matchup period.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMatchup {
    #[serde(rename = "matchupPeriodId", default)]
    pub matchup_period_id: u16,
    #[serde(rename = "playoffTierType", default)]
    pub playoff_tier_type: Option<String>,
    #[serde(default)]
    pub home: Option<RawMatchupTeam>,
    #[serde(default)]
    pub away: Option<RawMatchupTeam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMatchupTeam {
    #[serde(rename = "teamId")]
    pub team_id: u32,
    #[serde(rename = "totalPoints", default)]
    pub total_points: Option<f64>,
    #[serde(rename = "totalPointsLive", default)]
    pub total_points_live: Option<f64>,
    #[serde(rename = "totalProjectedPointsLive", default)]
    pub total_projected_points_live: Option<f64>,
    #[serde(rename = "rosterForCurrentScoringPeriod", default)]
    pub roster_for_current_scoring_period: Option<RawRoster>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRoster {
    #[serde(rename = "appliedStatTotal", default)]
    pub applied_stat_total: Option<f64>,
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "lineupSlotId", default)]
    pub lineup_slot_id: Option<u8>,
    #[serde(rename = "playerPoolEntry", default)]
    pub player_pool_entry: Option<PlayerPoolEntry>,
    /// Some payloads inline the player instead of nesting it in a pool entry
    #[serde(default)]
    pub player: Option<RawPlayer>,
}

impl RosterEntry {
    pub fn player(&self) -> Option<&RawPlayer> {
        self.player_pool_entry
            .as_ref()
            .map(|entry| &entry.player)
            .or(self.player.as_ref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPoolEntry {
    pub player: RawPlayer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayer {
    pub id: i64,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: i32,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: u32,
    #[serde(default)]
    pub injured: bool,
    #[serde(rename = "injuryStatus", default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub stats: Vec<RawPlayerStats>,
}

/// Stat block for one player and period.
/// `statSourceId`: 0 = actual, 1 = projected.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayerStats {
    #[serde(rename = "seasonId", default)]
    pub season_id: Option<u16>,
    #[serde(rename = "scoringPeriodId", default)]
    pub scoring_period_id: u16,
    #[serde(rename = "statSourceId", default)]
    pub stat_source_id: u8,
    #[serde(rename = "appliedTotal", default)]
    pub applied_total: f64,
}

/// Envelope for `/seasons/{year}?view=proTeamSchedules_wl`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProScheduleResponse {
    #[serde(default)]
    pub settings: ProScheduleSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProScheduleSettings {
    #[serde(rename = "proTeams", default)]
    pub pro_teams: Vec<RawProTeam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProTeam {
    pub id: u32,
    /// Games keyed by scoring period id (as a string)
    #[serde(rename = "proGamesByScoringPeriod", default)]
    pub pro_games_by_scoring_period: BTreeMap<String, Vec<RawProGame>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProGame {
    /// Kickoff, epoch milliseconds
    pub date: i64,
    #[serde(rename = "homeProTeamId")]
    pub home_pro_team_id: u32,
    #[serde(rename = "awayProTeamId")]
    pub away_pro_team_id: u32,
}
