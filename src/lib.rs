//! ESPN Fantasy Football fetchers for MagicMirror
//!
//! Two small command-line programs query ESPN's fantasy football API for one
//! league and print a single JSON document on stdout for a MagicMirror
//! module to parse. Diagnostics go to stderr only.
//!
//! ## Binaries
//!
//! - `fantasy-standings <league_id> <year> <username>`: league standings in
//!   ESPN's ranking order, with the user's team flagged
//! - `fantasy-matchup <league_id> <year> <username>`: the user's matchup for
//!   the current week, both lineups included
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_mirror::{commands::standings::get_league_standings, LeagueId, Season};
//!
//! # async fn example() -> espn_mirror::Result<()> {
//! let standings =
//!     get_league_standings(LeagueId::new(1295880), Season::new(2025), Some("sully296rocks"))
//!         .await?;
//!
//! if let Some(doc) = standings {
//!     println!("{}", serde_json::to_string(&doc)?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Private leagues need the ESPN login cookies:
//! ```bash
//! export ESPN_SWID='{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}'
//! export ESPN_S2='AEB...'
//! ```
//!
//! `RUST_LOG` overrides the diagnostic filter, e.g. `RUST_LOG=espn_mirror=debug`.

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod models;

// Re-export commonly used types
pub use cli::types::{LeagueId, LineupSlot, PlayerId, Position, ProTeam, Season, TeamId, Week};
pub use error::{EspnError, Result};
