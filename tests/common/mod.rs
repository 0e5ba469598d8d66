//! Mocked ESPN league, box score and pro schedule endpoints shared by the
//! integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const LEAGUE_PATH: &str = "/seasons/2025/segments/0/leagues/1295880";

// Sunday 2025-10-19 17:00 UTC, long over by the time the tests run
pub const KICKOFF_MS: i64 = 1_760_893_200_000;

pub fn league_payload() -> Value {
    json!({
        "id": 1295880,
        "seasonId": 2025,
        "scoringPeriodId": 7,
        "status": {"currentMatchupPeriod": 7, "finalScoringPeriod": 17},
        "settings": {
            "name": "Sunday Funday",
            "scheduleSettings": {"matchupPeriods": {"6": [6], "7": [7]}}
        },
        "members": [
            {"id": "{A}", "displayName": "JaneDoe", "firstName": "Jane", "lastName": "Doe"},
            {"id": "{B}", "displayName": "Sully296Rocks", "firstName": "Andrew", "lastName": "Sullivan"},
            {"id": "{C}", "displayName": "Carol"}
        ],
        "teams": [
            {"id": 1, "abbrev": "JANE", "name": "Jane's Juggernauts", "owners": ["{A}"], "playoffSeed": 1,
             "record": {"overall": {"wins": 5, "losses": 1, "pointsFor": 700.12, "pointsAgainst": 600.5}}},
            {"id": 2, "abbrev": "SULL", "name": "Sully's Squad", "owners": ["{B}"], "playoffSeed": 2,
             "logo": "https://example.com/b.png",
             "record": {"overall": {"wins": 4, "losses": 2, "pointsFor": 612.38, "pointsAgainst": 580.02}}},
            {"id": 3, "name": "Carol's Crew", "owners": ["{C}"], "playoffSeed": 3}
        ]
    })
}

pub fn player(id: i64, name: &str, position_id: i32, pro_team_id: u32, slot: u8, points: f64) -> Value {
    json!({
        "playerId": id,
        "lineupSlotId": slot,
        "playerPoolEntry": {"player": {
            "id": id,
            "fullName": name,
            "defaultPositionId": position_id,
            "proTeamId": pro_team_id,
            "injured": false,
            "injuryStatus": "ACTIVE",
            "active": true,
            "stats": [
                {"seasonId": 2025, "scoringPeriodId": 7, "statSourceId": 0, "appliedTotal": points},
                {"seasonId": 2025, "scoringPeriodId": 7, "statSourceId": 1, "appliedTotal": 15.5}
            ]
        }}
    })
}

pub fn box_score_payload() -> Value {
    json!({
        "schedule": [
            {
                "matchupPeriodId": 6,
                "home": {"teamId": 2, "totalPoints": 80.0},
                "away": {"teamId": 3, "totalPoints": 70.0}
            },
            {
                "matchupPeriodId": 7,
                "home": {
                    "teamId": 1,
                    "totalPointsLive": 101.26,
                    "totalProjectedPointsLive": 118.4,
                    "rosterForCurrentScoringPeriod": {"entries": [
                        player(3918298, "Josh Allen", 1, 2, 0, 24.1)
                    ]}
                },
                "away": {
                    "teamId": 2,
                    "rosterForCurrentScoringPeriod": {
                        "appliedStatTotal": 87.34,
                        "entries": [
                            player(4040715, "Jalen Hurts", 1, 21, 0, 87.34),
                            player(4361307, "Bye Guy", 3, 15, 20, 0.0)
                        ]
                    }
                }
            },
            {
                "matchupPeriodId": 7,
                "home": {"teamId": 3, "totalPoints": 0.0}
            }
        ]
    })
}

pub fn pro_schedule_payload() -> Value {
    let game = json!([{"date": KICKOFF_MS, "homeProTeamId": 21, "awayProTeamId": 19}]);
    let bills = json!([{"date": KICKOFF_MS, "homeProTeamId": 2, "awayProTeamId": 4}]);
    json!({
        "settings": {"proTeams": [
            {"id": 21, "proGamesByScoringPeriod": {"7": game}},
            {"id": 19, "proGamesByScoringPeriod": {"7": game}},
            {"id": 2, "proGamesByScoringPeriod": {"7": bills}},
            {"id": 15, "proGamesByScoringPeriod": {"8": bills}}
        ]}
    })
}

pub async fn mock_espn() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .and(query_param("view", "mStandings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(league_payload()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .and(query_param("view", "mScoreboard"))
        .and(query_param("scoringPeriodId", "7"))
        .and(header(
            "x-fantasy-filter",
            r#"{"schedule":{"filterMatchupPeriodIds":{"value":[7]}}}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(box_score_payload()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/seasons/2025"))
        .and(query_param("view", "proTeamSchedules_wl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pro_schedule_payload()))
        .mount(&server)
        .await;

    server
}
