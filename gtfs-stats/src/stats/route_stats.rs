use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::ServiceTime;

/// per-route statistics for one service date. a route with no active trips
/// on the date keeps its row, with `num_trips` 0 and every measured cell
/// `None`: undefined service is distinguishable from a route that ran and
/// covered zero distance.
///
/// distance cells sum over all active trips (degenerate geometry counts as
/// zero); duration and speed cells sum over trips whose endpoint times are
/// usable, so `mean_speed` always divides matched sums.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteStats {
    pub route_id: String,
    pub date: NaiveDate,
    pub num_trips: usize,
    pub total_distance: Option<uom::si::f64::Length>,
    pub total_duration: Option<uom::si::f64::Time>,
    pub mean_speed: Option<uom::si::f64::Velocity>,
    pub mean_trip_distance: Option<uom::si::f64::Length>,
    pub mean_trip_duration: Option<uom::si::f64::Time>,
    /// earliest trip start among the route's active trips
    pub start_time: Option<ServiceTime>,
    /// latest trip end among the route's active trips
    pub end_time: Option<ServiceTime>,
    /// maximum number of the route's trips running simultaneously
    pub peak_num_trips: Option<usize>,
    pub min_headway: Option<uom::si::f64::Time>,
    pub mean_headway: Option<uom::si::f64::Time>,
    pub max_headway: Option<uom::si::f64::Time>,
}

impl RouteStats {
    /// the row for a (route, date) pair with no active trips.
    pub fn no_service(route_id: &str, date: NaiveDate) -> RouteStats {
        RouteStats {
            route_id: route_id.to_string(),
            date,
            num_trips: 0,
            total_distance: None,
            total_duration: None,
            mean_speed: None,
            mean_trip_distance: None,
            mean_trip_duration: None,
            start_time: None,
            end_time: None,
            peak_num_trips: None,
            min_headway: None,
            mean_headway: None,
            max_headway: None,
        }
    }

    pub fn has_service(&self) -> bool {
        self.num_trips > 0
    }
}

/// per-route statistics averaged over a date set, weighting every date
/// with service equally regardless of its trip count (mean of daily means,
/// not a pooled mean over all trips). dates without service are counted in
/// `num_days` but excluded from the means.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteStatsSummary {
    pub route_id: String,
    pub num_days: usize,
    pub num_days_with_service: usize,
    pub mean_num_trips: Option<f64>,
    pub mean_total_distance: Option<uom::si::f64::Length>,
    pub mean_total_duration: Option<uom::si::f64::Time>,
    pub mean_speed: Option<uom::si::f64::Velocity>,
}
