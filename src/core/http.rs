//! HTTP utilities for ESPN API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};

pub const ESPN_SWID_ENV_VAR: &str = "ESPN_SWID";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
/// Overrides the ESPN API root (local mirrors, mock servers)
pub const ESPN_BASE_URL_ENV_VAR: &str = "ESPN_FFL_BASE_URL";

/// Build cookie headers from `ESPN_SWID` and `ESPN_S2`, if present.
///
/// Returns `Ok(None)` when either env var is missing (public leagues).
pub fn maybe_cookie_header_map() -> Result<Option<HeaderMap>> {
    let swid = std::env::var(ESPN_SWID_ENV_VAR).ok();
    let s2 = std::env::var(ESPN_S2_ENV_VAR).ok();
    match (swid, s2) {
        (Some(swid), Some(s2)) => Ok(Some(cookie_header_map(&swid, &s2)?)),
        _ => Ok(None),
    }
}

fn cookie_header_map(swid: &str, s2: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    let cookie = format!("SWID={}; espn_s2={}", swid.trim(), s2.trim());
    h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_header_map_format() {
        let headers = cookie_header_map("{ABC-123}", "s2token").unwrap();
        assert_eq!(
            headers.get(COOKIE).unwrap(),
            "SWID={ABC-123}; espn_s2=s2token"
        );
    }

    #[test]
    fn test_cookie_header_map_rejects_newlines() {
        assert!(cookie_header_map("swid", "bad\nvalue").is_err());
    }

    // Env-var tests share process state, so they run as one test.
    #[test]
    fn test_maybe_cookie_header_map_env_vars() {
        std::env::set_var(ESPN_SWID_ENV_VAR, "test_swid");
        std::env::set_var(ESPN_S2_ENV_VAR, "test_s2");
        let headers = maybe_cookie_header_map().unwrap().unwrap();
        assert!(headers.contains_key(COOKIE));

        std::env::remove_var(ESPN_S2_ENV_VAR);
        assert!(maybe_cookie_header_map().unwrap().is_none());

        std::env::remove_var(ESPN_SWID_ENV_VAR);
        assert!(maybe_cookie_header_map().unwrap().is_none());
    }
}
