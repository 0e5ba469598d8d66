//! League standings fetcher

use chrono::Local;
use std::io;
use tracing::{info, instrument, warn};

use crate::{
    commands::common::{is_your_team, owner_display_name, round_to_tenth, write_json},
    espn::{League, LeagueClient, Team},
    models::{LeagueInfo, StandingEntry, StandingsDocument},
    LeagueId, Result, Season,
};

/// Map one team to its standings row.
pub fn standing_entry(team: &Team, username: Option<&str>) -> StandingEntry {
    StandingEntry {
        rank: team.rank(),
        team_name: team.team_name.clone(),
        owner_name: owner_display_name(team).to_string(),
        wins: team.wins,
        losses: team.losses,
        ties: team.ties,
        points_for: round_to_tenth(team.points_for),
        points_against: round_to_tenth(team.points_against),
        logo_url: team.logo_url.clone(),
        playoff_pct: team.playoff_pct.map(round_to_tenth).unwrap_or(0.0),
        is_your_team: is_your_team(team, username),
    }
}

/// Build the standings document in the league's own ranking order.
///
/// Returns `None` for a league with no teams.
pub fn standings_document(league: &League, username: Option<&str>) -> Option<StandingsDocument> {
    if league.teams.is_empty() {
        return None;
    }

    Some(StandingsDocument {
        league_info: LeagueInfo {
            name: league.name.clone(),
            size: league.size(),
            current_week: league.current_week,
            timestamp: Local::now(),
        },
        standings: league
            .standings()
            .into_iter()
            .map(|team| standing_entry(team, username))
            .collect(),
    })
}

/// Connect to the league and build its standings document.
///
/// Connection failures are returned as [`crate::EspnError::Connection`];
/// an empty league is `Ok(None)`.
#[instrument]
pub async fn get_league_standings(
    league_id: LeagueId,
    season: Season,
    username: Option<&str>,
) -> Result<Option<StandingsDocument>> {
    let client = LeagueClient::connect(league_id, season).await?;
    Ok(client_standings(&client, username))
}

#[instrument(skip(base_url))]
pub async fn get_league_standings_with_base_url(
    base_url: &str,
    league_id: LeagueId,
    season: Season,
    username: Option<&str>,
) -> Result<Option<StandingsDocument>> {
    let client = LeagueClient::connect_with_base_url(base_url, league_id, season).await?;
    Ok(client_standings(&client, username))
}

fn client_standings(client: &LeagueClient, username: Option<&str>) -> Option<StandingsDocument> {
    let document = standings_document(client.league(), username);
    match &document {
        Some(doc) => info!(teams = doc.standings.len(), "built standings"),
        None => warn!("league returned no teams"),
    }
    document
}

/// Handle the standings command: print the document to stdout.
///
/// Returns `Ok(false)` when there was nothing to print.
pub async fn handle_standings(league_id: LeagueId, season: Season, username: &str) -> Result<bool> {
    match get_league_standings(league_id, season, Some(username)).await? {
        Some(document) => {
            write_json(io::stdout().lock(), &document)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::espn::Owner;
    use crate::{TeamId, Week};
    use std::collections::BTreeMap;

    fn team(id: u32, standing: u32, owner: Option<&str>) -> Team {
        Team {
            team_id: TeamId::new(id),
            team_abbrev: None,
            team_name: format!("Team {id}"),
            owners: owner
                .map(|name| Owner {
                    id: format!("{{{id}}}"),
                    display_name: name.to_string(),
                    first_name: String::new(),
                    last_name: String::new(),
                })
                .into_iter()
                .collect(),
            wins: 3,
            losses: 2,
            ties: 1,
            points_for: 123.456,
            points_against: 98.04,
            logo_url: Some(format!("https://example.com/{id}.png")),
            standing,
            final_standing: 0,
            playoff_pct: None,
        }
    }

    fn league(teams: Vec<Team>) -> League {
        League {
            league_id: LeagueId::new(1295880),
            season: Season::new(2025),
            name: "Sunday Funday".to_string(),
            current_week: Week::new(7),
            current_matchup_period: 7,
            matchup_periods: BTreeMap::new(),
            teams,
        }
    }

    #[test]
    fn test_standing_entry_rounding_and_defaults() {
        let entry = standing_entry(&team(1, 1, None), None);

        assert_eq!(entry.points_for, 123.5);
        assert_eq!(entry.points_against, 98.0);
        assert_eq!(entry.owner_name, "Unknown");
        assert_eq!(entry.playoff_pct, 0.0);
        assert_eq!(entry.ties, 1);
        assert!(!entry.is_your_team);
    }

    #[test]
    fn test_standing_entry_playoff_pct_rounded() {
        let mut t = team(1, 1, Some("JaneDoe"));
        t.playoff_pct = Some(87.349);
        assert_eq!(standing_entry(&t, None).playoff_pct, 87.3);
    }

    #[test]
    fn test_standings_document_order_and_flag() {
        // ESPN lists teams by id, not by rank
        let league = league(vec![
            team(1, 2, Some("Sully296Rocks")),
            team(2, 1, Some("Jane Doe")),
        ]);

        let doc = standings_document(&league, Some("sully296rocks")).unwrap();

        assert_eq!(doc.league_info.name, "Sunday Funday");
        assert_eq!(doc.league_info.size, 2);
        assert_eq!(doc.league_info.current_week, Week::new(7));

        let ranks: Vec<u32> = doc.standings.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
        assert_eq!(doc.standings[0].owner_name, "Jane Doe");
        assert!(!doc.standings[0].is_your_team);
        assert!(doc.standings[1].is_your_team);
    }

    #[test]
    fn test_rank_is_final_standing_once_season_decided() {
        // Seeds 1 and 2, but the second seed won the championship
        let mut champion = team(1, 2, Some("Sully296Rocks"));
        champion.final_standing = 1;
        let mut runner_up = team(2, 1, Some("Jane Doe"));
        runner_up.final_standing = 2;

        let doc = standings_document(&league(vec![runner_up, champion]), None).unwrap();

        let rows: Vec<(&str, u32)> = doc
            .standings
            .iter()
            .map(|s| (s.owner_name.as_str(), s.rank))
            .collect();
        assert_eq!(rows, vec![("Sully296Rocks", 1), ("Jane Doe", 2)]);
    }

    #[test]
    fn test_rank_is_seed_before_final_standings() {
        let entry = standing_entry(&team(1, 4, Some("JaneDoe")), None);
        assert_eq!(entry.rank, 4);
    }

    #[test]
    fn test_standings_document_empty_league() {
        assert!(standings_document(&league(vec![]), Some("anyone")).is_none());
    }
}
