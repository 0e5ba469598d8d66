//! Entry point: print the user's current matchup as JSON.
//!
//! Fetch and lookup failures are printed as `{"error": ...}` with exit code
//! 0. Only bad arguments exit with 1.

use clap::{error::ErrorKind, Parser};
use espn_mirror::{
    cli::MatchupCli,
    commands::{matchup::handle_matchup, write_json},
    core::init_logging,
    models::ErrorDocument,
};
use std::{io, process::ExitCode};

const USAGE: &str = "Usage: fantasy-matchup <league_id> <year> <username>";

#[tokio::main]
async fn main() -> ExitCode {
    init_logging("warn,espn_mirror::lineup=debug");

    let cli = match MatchupCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            let _ = write_json(io::stdout().lock(), &ErrorDocument::new(USAGE));
            return ExitCode::FAILURE;
        }
    };

    let args = cli.league;
    if let Err(e) = handle_matchup(args.league_id, args.year, &args.username).await {
        // Stdout itself failed, there is nowhere left to report JSON
        eprintln!("Error: {e}");
    }
    ExitCode::SUCCESS
}
