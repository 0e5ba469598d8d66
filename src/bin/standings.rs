//! Entry point: print league standings as JSON.
//!
//! Exit code 0 on success, 1 on bad arguments, connection failure, or a
//! league with no teams.

use clap::{error::ErrorKind, Parser};
use espn_mirror::{
    cli::StandingsCli, commands::standings::handle_standings, core::init_logging,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging("warn");

    let cli = match StandingsCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let args = cli.league;
    match handle_standings(args.league_id, args.year, &args.username).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
