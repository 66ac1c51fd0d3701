use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::{TimeField, TimeWindow};

/// the scope of one statistics query: which dates to resolve, an optional
/// time-of-day restriction, and optional identifier filters. an empty
/// route/stop filter list means "everything in the feed".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct StatsRequest {
    pub dates: Vec<NaiveDate>,
    /// restricts which visits (stop queries) or trip starts (route and
    /// feed queries) participate; also replaces the configured headway
    /// window when present
    pub window: Option<TimeWindow>,
    /// overrides the engine's configured time field for this query
    pub time_field: Option<TimeField>,
    pub route_filter: Option<Vec<String>>,
    pub stop_filter: Option<Vec<String>>,
}

impl StatsRequest {
    pub fn for_date(date: NaiveDate) -> StatsRequest {
        StatsRequest {
            dates: vec![date],
            ..Default::default()
        }
    }

    pub fn for_dates(dates: &[NaiveDate]) -> StatsRequest {
        StatsRequest {
            dates: dates.to_vec(),
            ..Default::default()
        }
    }
}
