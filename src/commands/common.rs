//! Helpers shared by the standings and matchup mappers.

use serde::Serialize;
use std::io::Write;

use crate::{espn::Team, Result};

/// Owner name used when a team has no resolvable owner.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Round to one decimal place (`123.456` → `123.5`).
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Display name of the team's primary owner, or `"Unknown"`.
pub fn owner_display_name(team: &Team) -> &str {
    team.primary_owner()
        .map(|o| o.display_name.as_str())
        .unwrap_or(UNKNOWN_OWNER)
}

/// Standings flag: the username appears in the primary owner's display name.
///
/// Always false when no username is configured.
pub fn is_your_team(team: &Team, username: Option<&str>) -> bool {
    let Some(username) = username.filter(|u| !u.is_empty()) else {
        return false;
    };
    team.primary_owner()
        .is_some_and(|o| contains_ignore_case(&o.display_name, username))
}

/// Matchup predicate: the username appears in any owner's display name.
///
/// Used both to pick the matchup and to orient it, so the two can never
/// disagree. An empty username matches nothing.
pub fn owner_matches(team: &Team, username: &str) -> bool {
    !username.is_empty()
        && team
            .owners
            .iter()
            .any(|o| contains_ignore_case(&o.display_name, username))
}

/// Write one JSON document followed by a newline.
pub fn write_json<W: Write, T: Serialize>(mut out: W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
