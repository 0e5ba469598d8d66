//! ESPN `x-fantasy-filter` header structures.
//!
//! ESPN's league endpoint returns the whole season schedule unless the
//! request narrows it with a JSON filter header, e.g.
//! `{"schedule":{"filterMatchupPeriodIds":{"value":[7]}}}`.

use crate::Result;
use reqwest::header::HeaderValue;
use serde::Serialize;

/// Wrapper for ESPN-style filter values.
///
/// ESPN API expects filter values to be wrapped in objects with a "value" field.
#[derive(Debug, Serialize)]
pub struct Val<T> {
    pub value: T,
}

#[derive(Debug, Default, Serialize)]
pub struct ScheduleFilter {
    pub schedule: MatchupPeriodFilter,
}

#[derive(Debug, Default, Serialize)]
pub struct MatchupPeriodFilter {
    #[serde(
        rename = "filterMatchupPeriodIds",
        skip_serializing_if = "Option::is_none"
    )]
    pub filter_matchup_period_ids: Option<Val<Vec<u16>>>,
}

/// General-purpose helper: any Serialize → JSON → HeaderValue
pub trait IntoHeaderValue {
    fn to_header_value(&self) -> Result<HeaderValue>;
}

impl<T> IntoHeaderValue for T
where
    T: Serialize,
{
    fn to_header_value(&self) -> Result<HeaderValue> {
        let s = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&s)?)
    }
}

/// Filter restricting the schedule to a single matchup period.
pub fn schedule_filter(matchup_period: u16) -> ScheduleFilter {
    ScheduleFilter {
        schedule: MatchupPeriodFilter {
            filter_matchup_period_ids: Some(Val {
                value: vec![matchup_period],
            }),
        },
    }
}
