use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::ServiceTime;

/// per-stop statistics for one service date. visits are stop-time rows of
/// trips active on the date, positioned by the query's time field and
/// sorted ascending with trip-identifier tie-breaks, so the headway
/// sequence is deterministic regardless of input row order. headway cells
/// are `None` with fewer than two visits, never zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopStats {
    pub stop_id: String,
    pub date: NaiveDate,
    pub num_vehicles: usize,
    /// distinct routes among the counted visits
    pub num_routes: usize,
    pub start_time: Option<ServiceTime>,
    pub end_time: Option<ServiceTime>,
    pub min_headway: Option<uom::si::f64::Time>,
    pub mean_headway: Option<uom::si::f64::Time>,
    pub max_headway: Option<uom::si::f64::Time>,
}

impl StopStats {
    /// the row for a (stop, date) pair with no counted visits.
    pub fn no_service(stop_id: &str, date: NaiveDate) -> StopStats {
        StopStats {
            stop_id: stop_id.to_string(),
            date,
            num_vehicles: 0,
            num_routes: 0,
            start_time: None,
            end_time: None,
            min_headway: None,
            mean_headway: None,
            max_headway: None,
        }
    }

    pub fn has_service(&self) -> bool {
        self.num_vehicles > 0
    }
}

/// per-stop statistics averaged over a date set, each served date weighted
/// equally (mean of daily means).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopStatsSummary {
    pub stop_id: String,
    pub num_days: usize,
    pub num_days_with_service: usize,
    pub mean_num_vehicles: Option<f64>,
    pub mean_headway: Option<uom::si::f64::Time>,
}
