//! Error types for the ESPN fantasy fetchers

use thiserror::Error;


pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Failed to connect to ESPN API: {source}")]
    Connection {
        #[source]
        source: Box<EspnError>,
    },

    #[error("Access denied to league {league_id}: set ESPN_SWID and ESPN_S2 for private leagues")]
    AccessDenied { league_id: u32 },

    #[error("League {league_id} does not exist")]
    InvalidLeague { league_id: u32 },

    #[error("Could not find matchup for user: {username}")]
    MatchupNotFound { username: String },
}

impl EspnError {
    /// Wrap a lower-level failure raised while building the league connection.
    pub fn connection(err: EspnError) -> Self {
        EspnError::Connection {
            source: Box::new(err),
        }
    }
}
