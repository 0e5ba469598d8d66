//! Core utilities shared by the ESPN request layer
//!
//! - `http`: cookie headers for private leagues
//! - `filters`: `x-fantasy-filter` header structures
//! - `logging`: stderr tracing subscriber for the binaries

pub mod filters;
pub mod http;
pub mod logging;

pub use filters::{schedule_filter, IntoHeaderValue, ScheduleFilter, Val};
pub use http::{
    maybe_cookie_header_map, ESPN_BASE_URL_ENV_VAR, ESPN_S2_ENV_VAR, ESPN_SWID_ENV_VAR,
};
pub use logging::init_logging;
