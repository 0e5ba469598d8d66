//! Raw requests against ESPN's fantasy football read API.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, RequestBuilder, StatusCode,
};
use serde::de::DeserializeOwned;
use std::{sync::LazyLock, time::Duration};
use tracing::{debug, instrument};

use crate::{
    core::{maybe_cookie_header_map, schedule_filter, IntoHeaderValue, ESPN_BASE_URL_ENV_VAR},
    espn::types::{LeagueResponse, ProScheduleResponse},
    EspnError, LeagueId, Result, Season, Week,
};


/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Views that make up a full league snapshot: teams, members, standings, settings.
pub const LEAGUE_VIEWS: [&str; 5] = ["mTeam", "mRoster", "mMatchup", "mSettings", "mStandings"];

/// Views for a scored schedule with per-player lineups.
pub const BOX_SCORE_VIEWS: [&str; 2] = ["mMatchupScore", "mScoreboard"];

pub static CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .user_agent(concat!("espn-mirror/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Client build")
});

/// API root: `ESPN_FFL_BASE_URL` when set, else [`FFL_BASE_URL`].
pub fn api_base_url() -> String {
    std::env::var(ESPN_BASE_URL_ENV_VAR)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| FFL_BASE_URL.to_string())
}

/// Build the headers sent with every request.
///
/// Adds the cookie header when `ESPN_SWID` and `ESPN_S2` are set.
pub fn get_common_headers() -> Result<HeaderMap> {
    let mut headers = maybe_cookie_header_map()?.unwrap_or_default();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Request builder bound to one league and season.
#[derive(Debug, Clone)]
pub struct EspnRequest {
    base_url: String,
    league_id: LeagueId,
    season: Season,
    headers: HeaderMap,
}

impl EspnRequest {
    pub fn new(league_id: LeagueId, season: Season) -> Result<Self> {
        Self::with_base_url(&api_base_url(), league_id, season)
    }

    /// Same as [`EspnRequest::new`] against a different API root (mock servers, mirrors).
    pub fn with_base_url(base_url: &str, league_id: LeagueId, season: Season) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            league_id,
            season,
            headers: get_common_headers()?,
        })
    }

    pub fn league_id(&self) -> LeagueId {
        self.league_id
    }

    pub fn season(&self) -> Season {
        self.season
    }

    fn league_endpoint(&self) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, self.season, self.league_id
        )
    }

    /// Fetch the league snapshot used for standings and team lookups.
    #[instrument(skip(self), fields(league_id = %self.league_id, season = %self.season))]
    pub async fn get_league(&self) -> Result<LeagueResponse> {
        let params: Vec<(&str, &str)> = LEAGUE_VIEWS.iter().map(|v| ("view", *v)).collect();
        let builder = CLIENT
            .get(self.league_endpoint())
            .headers(self.headers.clone())
            .query(&params);

        let league: LeagueResponse = self.send(builder).await?;
        debug!(
            teams = league.teams.len(),
            members = league.members.len(),
            "fetched league"
        );
        Ok(league)
    }

    /// Fetch the scored schedule for one scoring period of one matchup period.
    #[instrument(skip(self), fields(league_id = %self.league_id, season = %self.season))]
    pub async fn get_matchups(&self, week: Week, matchup_period: u16) -> Result<LeagueResponse> {
        let mut params: Vec<(&str, String)> = BOX_SCORE_VIEWS
            .iter()
            .map(|v| ("view", v.to_string()))
            .collect();
        params.push(("scoringPeriodId", week.to_string()));

        let mut headers = self.headers.clone();
        headers.insert(
            "x-fantasy-filter",
            schedule_filter(matchup_period).to_header_value()?,
        );

        let builder = CLIENT
            .get(self.league_endpoint())
            .headers(headers)
            .query(&params);

        let data: LeagueResponse = self.send(builder).await?;
        debug!(matchups = data.schedule.len(), "fetched matchups");
        Ok(data)
    }

    /// Fetch the NFL schedule for the season (opponents, kickoff times, byes).
    #[instrument(skip(self), fields(season = %self.season))]
    pub async fn get_pro_schedule(&self) -> Result<ProScheduleResponse> {
        let url = format!("{}/seasons/{}", self.base_url, self.season);
        let builder = CLIENT
            .get(&url)
            .headers(self.headers.clone())
            .query(&[("view", "proTeamSchedules_wl")]);

        let data: ProScheduleResponse = self.send(builder).await?;
        debug!(pro_teams = data.settings.pro_teams.len(), "fetched pro schedule");
        Ok(data)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        match response.status() {
            StatusCode::UNAUTHORIZED => Err(EspnError::AccessDenied {
                league_id: self.league_id.as_u32(),
            }),
            StatusCode::NOT_FOUND => Err(EspnError::InvalidLeague {
                league_id: self.league_id.as_u32(),
            }),
            _ => {
                let body = response.error_for_status()?.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
        }
    }
}
