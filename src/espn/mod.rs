//! ESPN fantasy football provider layer: raw requests, payload types, and
//! the league / box score models the fetchers map from.

pub mod box_score;
pub mod client;
pub mod http;
pub mod league;
pub mod types;

pub use box_score::{BoxPlayer, BoxScore, BoxSide, ProGame, ProSchedule};
pub use client::LeagueClient;
pub use league::{League, Owner, Team};
