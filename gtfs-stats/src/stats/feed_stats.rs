use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// feed-wide statistics for one service date: how much of the network ran
/// and how much service it delivered. cells follow the same undefined
/// policy as the route table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeedStats {
    pub date: NaiveDate,
    pub num_trips: usize,
    /// distinct routes with at least one active trip
    pub num_routes: usize,
    /// distinct stops visited by at least one active trip
    pub num_stops: usize,
    pub total_distance: Option<uom::si::f64::Length>,
    pub total_duration: Option<uom::si::f64::Time>,
    /// maximum number of trips running simultaneously across the feed
    pub peak_num_trips: Option<usize>,
}

impl FeedStats {
    pub fn no_service(date: NaiveDate) -> FeedStats {
        FeedStats {
            date,
            num_trips: 0,
            num_routes: 0,
            num_stops: 0,
            total_distance: None,
            total_duration: None,
            peak_num_trips: None,
        }
    }
}
