//! League and team models built from the raw league payload.

use std::collections::{BTreeMap, HashMap};

use crate::{
    espn::types::{LeagueResponse, Member, RawTeam},
    LeagueId, Season, TeamId, Week,
};

/// A team owner, resolved from the league's member list.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&Member> for Owner {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.clone(),
            display_name: member.display_name.clone().unwrap_or_default(),
            first_name: member.first_name.clone().unwrap_or_default(),
            last_name: member.last_name.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub team_id: TeamId,
    pub team_abbrev: Option<String>,
    pub team_name: String,
    pub owners: Vec<Owner>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub logo_url: Option<String>,
    /// Current playoff seed
    pub standing: u32,
    /// Final rank once the season is decided, 0 before that
    pub final_standing: u32,
    /// Percent chance of making the playoffs, when ESPN has simulated it
    pub playoff_pct: Option<f64>,
}

impl Team {
    fn from_raw(raw: &RawTeam, members: &HashMap<&str, &Member>) -> Self {
        let team_name = match raw.name.as_deref().filter(|n| !n.trim().is_empty()) {
            Some(name) => name.trim().to_string(),
            None => format!(
                "{} {}",
                raw.location.as_deref().unwrap_or_default(),
                raw.nickname.as_deref().unwrap_or_default()
            )
            .trim()
            .to_string(),
        };

        // Keep ESPN's owner order so the primary owner stays first
        let owners = raw
            .owners
            .iter()
            .filter_map(|id| members.get(id.as_str()).map(|m| Owner::from(*m)))
            .collect();

        let overall = &raw.record.overall;
        Self {
            team_id: TeamId::new(raw.id),
            team_abbrev: raw.abbrev.clone(),
            team_name,
            owners,
            wins: overall.wins,
            losses: overall.losses,
            ties: overall.ties,
            points_for: overall.points_for,
            points_against: overall.points_against,
            logo_url: raw.logo.clone(),
            standing: raw.playoff_seed,
            final_standing: raw.rank_calculated_final,
            playoff_pct: raw
                .current_simulation_results
                .as_ref()
                .and_then(|sim| sim.playoff_pct)
                .map(|pct| pct * 100.0),
        }
    }

    pub fn primary_owner(&self) -> Option<&Owner> {
        self.owners.first()
    }

    /// Standing the league ranks by: the final rank once set, else the seed.
    pub fn rank(&self) -> u32 {
        if self.final_standing != 0 {
            self.final_standing
        } else {
            self.standing
        }
    }
}

#[derive(Debug, Clone)]
pub struct League {
    pub league_id: LeagueId,
    pub season: Season,
    pub name: String,
    pub current_week: Week,
    pub current_matchup_period: u16,
    /// Matchup period id → scoring periods it spans
    pub matchup_periods: BTreeMap<u16, Vec<u16>>,
    pub teams: Vec<Team>,
}

impl League {
    pub fn from_response(league_id: LeagueId, season: Season, data: &LeagueResponse) -> Self {
        let members: HashMap<&str, &Member> =
            data.members.iter().map(|m| (m.id.as_str(), m)).collect();
        let teams = data
            .teams
            .iter()
            .map(|t| Team::from_raw(t, &members))
            .collect();

        // After the season ESPN keeps advancing scoringPeriodId past the final week
        let final_period = data.status.final_scoring_period;
        let current_week = if final_period == 0 || data.scoring_period_id <= final_period {
            data.scoring_period_id
        } else {
            final_period
        };

        Self {
            league_id,
            season,
            name: data.settings.name.clone(),
            current_week: Week::new(current_week),
            current_matchup_period: data.status.current_matchup_period,
            matchup_periods: data.settings.schedule_settings.matchup_periods.clone(),
            teams,
        }
    }

    pub fn size(&self) -> usize {
        self.teams.len()
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }

    /// Teams in ESPN's standings order.
    ///
    /// Sorted by final rank when the season is decided, by playoff seed
    /// before that. The sort is stable, so ties keep ESPN's team order.
    pub fn standings(&self) -> Vec<&Team> {
        let mut sorted: Vec<&Team> = self.teams.iter().collect();
        sorted.sort_by_key(|t| t.rank());
        sorted
    }

    /// Matchup period containing `week`.
    ///
    /// Future weeks and weeks missing from the schedule settings fall back to
    /// the current matchup period.
    pub fn matchup_period_for(&self, week: Week) -> u16 {
        if week > self.current_week {
            return self.current_matchup_period;
        }
        self.matchup_periods
            .iter()
            .find(|(_, weeks)| weeks.contains(&week.as_u16()))
            .map(|(period, _)| *period)
            .unwrap_or(self.current_matchup_period)
    }
}
