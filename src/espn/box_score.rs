//! Scored matchups: box scores, their two sides, and each side's lineup.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use crate::{
    cli::types::{LineupSlot, Position, ProTeam},
    espn::{
        league::{League, Team},
        types::{ProScheduleResponse, RawMatchup, RawMatchupTeam, RawPlayer, RosterEntry},
    },
    models::StatSource,
    PlayerId, Season, TeamId, Week,
};

/// A game is treated as final this long after kickoff.
const GAME_LENGTH_HOURS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProGame {
    pub opponent: ProTeam,
    pub kickoff: DateTime<Utc>,
}

/// NFL games for a single scoring period, keyed by pro team id.
#[derive(Debug, Clone, Default)]
pub struct ProSchedule {
    games: HashMap<u32, ProGame>,
}

impl ProSchedule {
    pub fn from_response(data: &ProScheduleResponse, week: Week) -> Self {
        let key = week.as_u16().to_string();
        let games = data
            .settings
            .pro_teams
            .iter()
            .filter_map(|team| {
                let game = team.pro_games_by_scoring_period.get(&key)?.first()?;
                let opponent_id = if team.id == game.away_pro_team_id {
                    game.home_pro_team_id
                } else {
                    game.away_pro_team_id
                };
                let kickoff = DateTime::<Utc>::from_timestamp_millis(game.date)?;
                Some((
                    team.id,
                    ProGame {
                        opponent: ProTeam(opponent_id),
                        kickoff,
                    },
                ))
            })
            .collect();
        Self { games }
    }

    pub fn game_for(&self, pro_team: ProTeam) -> Option<&ProGame> {
        self.games.get(&pro_team.0)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// One rostered player for the week of a box score.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,
    /// `None` for entries ESPN sent without a lineup slot
    pub slot: Option<LineupSlot>,
    pub pro_team: ProTeam,
    pub pro_opponent: Option<ProTeam>,
    pub points: f64,
    pub projected_points: f64,
    /// 100 once the pro game is over, 0 before
    pub game_played: u8,
    pub game_date: Option<DateTime<Utc>>,
    pub injured: bool,
    pub injury_status: Option<String>,
    pub active: bool,
    pub on_bye_week: bool,
}

impl BoxPlayer {
    pub fn from_entry(
        entry: &RosterEntry,
        schedule: &ProSchedule,
        season: Season,
        week: Week,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let player = entry.player()?;
        let pro_team = ProTeam(player.pro_team_id);
        let game = schedule.game_for(pro_team);
        let (points, projected_points) = weekly_points(player, season, week);

        Some(Self {
            player_id: PlayerId::new(player.id),
            name: player.full_name.clone().unwrap_or_default(),
            position: Position::from_default_position_id(player.default_position_id),
            slot: entry.lineup_slot_id.map(LineupSlot),
            pro_team,
            pro_opponent: game.map(|g| g.opponent),
            points,
            projected_points,
            game_played: match game {
                Some(g) if now > g.kickoff + Duration::hours(GAME_LENGTH_HOURS) => 100,
                Some(_) => 0,
                // No game this week, nothing left to play
                None => 100,
            },
            game_date: game.map(|g| g.kickoff),
            injured: player.injured,
            injury_status: player.injury_status.clone(),
            active: player.active.unwrap_or(true),
            on_bye_week: game.is_none(),
        })
    }

    pub fn slot_name(&self) -> &'static str {
        self.slot.map(|s| s.name()).unwrap_or("FA")
    }

    pub fn is_starter(&self) -> bool {
        self.slot.map(|s| s.is_starter()).unwrap_or(false)
    }
}

/// Actual and projected fantasy points for `week`, 0 when ESPN has none.
fn weekly_points(player: &RawPlayer, season: Season, week: Week) -> (f64, f64) {
    let mut points = 0.0;
    let mut projected = 0.0;
    for stats in &player.stats {
        if stats.scoring_period_id != week.as_u16() {
            continue;
        }
        if stats.season_id.is_some_and(|s| s != season.as_u16()) {
            continue;
        }
        match StatSource::from_id(stats.stat_source_id) {
            Some(StatSource::Actual) => points = stats.applied_total,
            Some(StatSource::Projected) => projected = stats.applied_total,
            None => {}
        }
    }
    (points, projected)
}

/// One team's half of a box score.
#[derive(Debug, Clone)]
pub struct BoxSide {
    pub team: Team,
    pub score: f64,
    pub projected: f64,
    pub lineup: Vec<BoxPlayer>,
}

impl BoxSide {
    fn from_raw(
        raw: &RawMatchupTeam,
        team: &Team,
        schedule: &ProSchedule,
        season: Season,
        week: Week,
        now: DateTime<Utc>,
    ) -> Self {
        let roster = raw.roster_for_current_scoring_period.as_ref();
        let lineup: Vec<BoxPlayer> = roster
            .map(|r| r.entries.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|entry| BoxPlayer::from_entry(entry, schedule, season, week, now))
            .collect();

        let score = raw
            .total_points_live
            .or_else(|| roster.and_then(|r| r.applied_stat_total))
            .or(raw.total_points)
            .unwrap_or(0.0);

        let projected = raw.total_projected_points_live.unwrap_or_else(|| {
            lineup
                .iter()
                .filter(|p| p.is_starter())
                .map(|p| p.projected_points)
                .sum()
        });

        Self {
            team: team.clone(),
            score,
            projected,
            lineup,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoxScore {
    pub matchup_type: String,
    pub is_playoff: bool,
    pub home: BoxSide,
    /// `None` on a bye
    pub away: Option<BoxSide>,
}

impl BoxScore {
    /// Build a box score, or `None` when the home team is not in the league.
    pub fn from_matchup(
        raw: &RawMatchup,
        league: &League,
        schedule: &ProSchedule,
        week: Week,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let side = |data: &RawMatchupTeam| {
            league
                .team(TeamId::new(data.team_id))
                .map(|team| BoxSide::from_raw(data, team, schedule, league.season, week, now))
        };

        let home = side(raw.home.as_ref()?)?;
        let away = raw.away.as_ref().and_then(side);
        let matchup_type = raw
            .playoff_tier_type
            .clone()
            .unwrap_or_else(|| "NONE".to_string());

        Some(Self {
            is_playoff: matchup_type != "NONE",
            matchup_type,
            home,
            away,
        })
    }
}
