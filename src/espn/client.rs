//! A connected league: one league snapshot plus the request builder used
//! for follow-up box score calls.

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::{
    espn::{
        box_score::{BoxScore, ProSchedule},
        http::EspnRequest,
        league::League,
    },
    EspnError, LeagueId, Result, Season, Week,
};

#[derive(Debug, Clone)]
pub struct LeagueClient {
    request: EspnRequest,
    league: League,
}

impl LeagueClient {
    /// Fetch the league snapshot. Any failure is wrapped in [`EspnError::Connection`].
    pub async fn connect(league_id: LeagueId, season: Season) -> Result<Self> {
        let request = EspnRequest::new(league_id, season).map_err(EspnError::connection)?;
        Self::open(request).await
    }

    pub async fn connect_with_base_url(
        base_url: &str,
        league_id: LeagueId,
        season: Season,
    ) -> Result<Self> {
        let request =
            EspnRequest::with_base_url(base_url, league_id, season).map_err(EspnError::connection)?;
        Self::open(request).await
    }

    #[instrument(skip(request), fields(league_id = %request.league_id(), season = %request.season()))]
    async fn open(request: EspnRequest) -> Result<Self> {
        let data = request.get_league().await.map_err(EspnError::connection)?;
        let league = League::from_response(request.league_id(), request.season(), &data);

        info!(
            name = %league.name,
            teams = league.size(),
            current_week = %league.current_week,
            "connected to league"
        );
        Ok(Self { request, league })
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    /// Scored matchups for `week`, in ESPN's schedule order.
    ///
    /// Weeks past the current week are clamped to the current week.
    #[instrument(skip(self), fields(league_id = %self.league.league_id))]
    pub async fn box_scores(&self, week: Week) -> Result<Vec<BoxScore>> {
        let matchup_period = self.league.matchup_period_for(week);
        let scoring_period = week.min(self.league.current_week);

        let (matchups, pro_schedule) = tokio::try_join!(
            self.request.get_matchups(scoring_period, matchup_period),
            self.request.get_pro_schedule(),
        )?;
        let schedule = ProSchedule::from_response(&pro_schedule, scoring_period);
        let now = Utc::now();

        let box_scores: Vec<BoxScore> = matchups
            .schedule
            .iter()
            .filter(|m| m.matchup_period_id == matchup_period)
            .filter_map(|m| BoxScore::from_matchup(m, &self.league, &schedule, scoring_period, now))
            .collect();

        debug!(
            matchup_period,
            scoring_period = %scoring_period,
            pro_games = schedule.len(),
            count = box_scores.len(),
            "built box scores"
        );
        Ok(box_scores)
    }
}
