//! Current-week matchup fetcher

use chrono::Local;
use std::io;
use tracing::{debug, info, instrument, warn};

use crate::{
    commands::common::{owner_matches, write_json, UNKNOWN_OWNER},
    espn::{http::api_base_url, BoxPlayer, BoxScore, BoxSide, LeagueClient},
    models::{
        ErrorDocument, LineupPlayer, MatchupDocument, MatchupOutcome, OwnerInfo, RecordInfo,
        TeamSide,
    },
    EspnError, LeagueId, Result, Season, Week,
};

/// First box score with the user on either side, oriented as
/// `(box score, your side, opponent side)`.
///
/// Byes have no opponent and are skipped.
pub fn find_matchup<'a>(
    box_scores: &'a [BoxScore],
    username: &str,
) -> Option<(&'a BoxScore, &'a BoxSide, &'a BoxSide)> {
    box_scores.iter().find_map(|box_score| {
        let home = &box_score.home;
        let away = box_score.away.as_ref()?;
        if owner_matches(&home.team, username) {
            Some((box_score, home, away))
        } else if owner_matches(&away.team, username) {
            Some((box_score, away, home))
        } else {
            None
        }
    })
}

pub fn lineup_player(player: &BoxPlayer) -> LineupPlayer {
    debug!(
        target: "espn_mirror::lineup",
        name = %player.name,
        pro_team = player.pro_team.abbrev(),
        game_played = player.game_played,
        points = player.points,
        projected = player.projected_points,
        "player"
    );

    LineupPlayer {
        name: player.name.clone(),
        position: player.position.to_string(),
        slot_position: player.slot_name().to_string(),
        pro_team: player.pro_team.abbrev().to_string(),
        pro_opponent: player
            .pro_opponent
            .map(|team| team.abbrev())
            .unwrap_or("None")
            .to_string(),
        points: player.points,
        projected_points: player.projected_points,
        game_played: player.game_played,
        game_date: player.game_date,
        injured: player.injured,
        injury_status: player.injury_status.clone(),
        active_status: if player.active { "active" } else { "inactive" }.to_string(),
        on_bye_week: player.on_bye_week,
        player_id: player.player_id,
    }
}

/// Map one side of a box score. Points pass through unrounded.
pub fn team_side(side: &BoxSide) -> TeamSide {
    let team = &side.team;
    let owner = match team.primary_owner() {
        Some(owner) => OwnerInfo {
            display_name: owner.display_name.clone(),
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
        },
        None => OwnerInfo {
            display_name: UNKNOWN_OWNER.to_string(),
            first_name: String::new(),
            last_name: String::new(),
        },
    };

    TeamSide {
        name: team.team_name.clone(),
        owner,
        record: RecordInfo {
            wins: team.wins,
            losses: team.losses,
            ties: team.ties,
        },
        logo_url: team.logo_url.clone(),
        team_abbrev: team.team_abbrev.clone().unwrap_or_default(),
        team_id: team.team_id,
        standing: team.standing,
        score: side.score,
        projected: side.projected,
        points_for: team.points_for,
        points_against: team.points_against,
        lineup: side.lineup.iter().map(lineup_player).collect(),
    }
}

/// Build the matchup document for `username` from one week's box scores.
pub fn matchup_document(
    week: Week,
    box_scores: &[BoxScore],
    username: &str,
) -> Result<MatchupDocument> {
    let (box_score, yours, opponent) =
        find_matchup(box_scores, username).ok_or_else(|| EspnError::MatchupNotFound {
            username: username.to_string(),
        })?;

    Ok(MatchupDocument {
        week,
        timestamp: Local::now(),
        matchup_type: box_score.matchup_type.clone(),
        is_playoff: box_score.is_playoff,
        your_team: team_side(yours),
        opponent: team_side(opponent),
    })
}

async fn fetch_matchup(
    base_url: &str,
    league_id: LeagueId,
    season: Season,
    username: &str,
) -> Result<MatchupDocument> {
    let client = LeagueClient::connect_with_base_url(base_url, league_id, season).await?;
    let week = client.league().current_week;
    let box_scores = client.box_scores(week).await?;
    matchup_document(week, &box_scores, username)
}

/// Fetch the user's current matchup. Failures come back as an error document.
pub async fn get_fantasy_matchup(
    league_id: LeagueId,
    season: Season,
    username: &str,
) -> MatchupOutcome {
    get_fantasy_matchup_with_base_url(&api_base_url(), league_id, season, username).await
}

#[instrument(skip(base_url))]
pub async fn get_fantasy_matchup_with_base_url(
    base_url: &str,
    league_id: LeagueId,
    season: Season,
    username: &str,
) -> MatchupOutcome {
    match fetch_matchup(base_url, league_id, season, username).await {
        Ok(document) => {
            info!(
                week = %document.week,
                opponent = %document.opponent.name,
                "built matchup"
            );
            MatchupOutcome::Matchup(Box::new(document))
        }
        Err(e @ EspnError::MatchupNotFound { .. }) => {
            warn!("{e}");
            MatchupOutcome::Error(ErrorDocument::new(e.to_string()))
        }
        Err(e) => {
            warn!(error = %e, "matchup fetch failed");
            MatchupOutcome::Error(ErrorDocument::new(format!("ESPN API error: {e}")))
        }
    }
}

/// Handle the matchup command: print the outcome to stdout.
pub async fn handle_matchup(league_id: LeagueId, season: Season, username: &str) -> Result<()> {
    let outcome = get_fantasy_matchup(league_id, season, username).await;
    write_json(io::stdout().lock(), &outcome)
}
