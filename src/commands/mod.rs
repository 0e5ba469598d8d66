//! Fetch-and-map pipelines behind the two binaries

pub mod common;
pub mod matchup;
pub mod standings;

pub use common::{contains_ignore_case, is_your_team, owner_matches, round_to_tenth, write_json};
