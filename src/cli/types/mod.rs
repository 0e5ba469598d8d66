//! Type-safe wrappers and lookup tables for ESPN fantasy football data.

pub mod ids;
pub mod position;
pub mod pro_team;
pub mod time;

pub use ids::{LeagueId, PlayerId, TeamId};
pub use position::{LineupSlot, Position};
pub use pro_team::ProTeam;
pub use time::{Season, Week};
