//! Exit codes and output streams of the two binaries
//!
//! Network paths run against the mocked ESPN endpoints through
//! `ESPN_FFL_BASE_URL`.

mod common;

use common::mock_espn;
use espn_mirror::core::{ESPN_BASE_URL_ENV_VAR, ESPN_S2_ENV_VAR, ESPN_SWID_ENV_VAR};
use serde_json::{json, Value};
use std::process::{Command, Output};

async fn run_against(bin: &'static str, base_url: String, username: &'static str) -> Output {
    tokio::task::spawn_blocking(move || {
        Command::new(bin)
            .args(["1295880", "2025", username])
            .env(ESPN_BASE_URL_ENV_VAR, base_url)
            .env_remove("RUST_LOG")
            .env_remove(ESPN_SWID_ENV_VAR)
            .env_remove(ESPN_S2_ENV_VAR)
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

#[test]
fn test_matchup_usage_error_is_json_on_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_fantasy-matchup"))
        .args(["1295880", "2025"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let doc: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        doc,
        json!({"error": "Usage: fantasy-matchup <league_id> <year> <username>"})
    );
}

#[test]
fn test_matchup_non_numeric_league_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_fantasy-matchup"))
        .args(["my-league", "2025", "sully296rocks"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let doc: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(doc["error"].as_str().unwrap().starts_with("Usage:"));
}

#[test]
fn test_standings_usage_error_keeps_stdout_empty() {
    let output = Command::new(env!("CARGO_BIN_EXE_fantasy-standings"))
        .arg("1295880")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_help_exits_zero() {
    for bin in [
        env!("CARGO_BIN_EXE_fantasy-standings"),
        env!("CARGO_BIN_EXE_fantasy-matchup"),
    ] {
        let output = Command::new(bin).arg("--help").output().unwrap();
        assert_eq!(output.status.code(), Some(0));
    }
}

#[tokio::test]
async fn test_matchup_diagnostics_on_stderr_only() {
    let server = mock_espn().await;
    let output = run_against(
        env!("CARGO_BIN_EXE_fantasy-matchup"),
        server.uri(),
        "sully296rocks",
    )
    .await;

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(!stdout.contains("espn_mirror::lineup"));
    let doc: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["your_team"]["name"], "Sully's Squad");

    let stderr = String::from_utf8(output.stderr).unwrap();
    let hurts = stderr
        .lines()
        .find(|line| line.contains("espn_mirror::lineup") && line.contains("name=Jalen Hurts"))
        .expect("per-player line on stderr");
    assert!(hurts.contains("PHI"));
    assert!(hurts.contains("game_played=100"));
    assert!(hurts.contains("points=87.34"));
    assert!(hurts.contains("projected=15.5"));
    // Both lineups are logged
    assert!(stderr.contains("name=Josh Allen"));
}

#[tokio::test]
async fn test_matchup_not_found_exits_zero() {
    let server = mock_espn().await;
    let output =
        run_against(env!("CARGO_BIN_EXE_fantasy-matchup"), server.uri(), "nobody").await;

    assert_eq!(output.status.code(), Some(0));
    let doc: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc, json!({"error": "Could not find matchup for user: nobody"}));
}

#[tokio::test]
async fn test_standings_prints_document() {
    let server = mock_espn().await;
    let output = run_against(
        env!("CARGO_BIN_EXE_fantasy-standings"),
        server.uri(),
        "sully296rocks",
    )
    .await;

    assert_eq!(output.status.code(), Some(0));
    let doc: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["league_info"]["name"], "Sunday Funday");
    assert_eq!(doc["standings"][1]["is_your_team"], true);
    assert!(!String::from_utf8(output.stderr).unwrap().contains("espn_mirror::lineup"));
}

#[tokio::test]
async fn test_standings_connection_failure_exits_one() {
    // Nothing mounted: every request is a 404
    let server = wiremock::MockServer::start().await;
    let output = run_against(
        env!("CARGO_BIN_EXE_fantasy-standings"),
        server.uri(),
        "sully296rocks",
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Failed to connect to ESPN API: League 1295880 does not exist"));
}
