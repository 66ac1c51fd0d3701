use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{
    feed_error::FeedError, route::Route, service::CalendarException, service::CalendarPattern,
    shape::Shape, stop::Stop, trip::Trip,
};

/// the six in-memory GTFS tables consumed by statistics computation. the
/// feed is a read-only input: nothing here is mutated by any computation.
///
/// tables are plain row vectors; indexes needed for aggregation are built
/// by the engine. a feed is expected to be loaded by an external parser
/// (or through the `gtfs` feature adapter) and validated once before use.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Feed {
    pub stops: Vec<Stop>,
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub shapes: Vec<Shape>,
    pub calendar: Vec<CalendarPattern>,
    pub calendar_dates: Vec<CalendarException>,
}

impl Feed {
    /// checks the structural invariants statistics computation relies on:
    /// the feed has stops and trips at all, and stop times and shape points
    /// come ordered by strictly increasing sequence.
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.stops.is_empty() {
            return Err(FeedError::EmptyFeed(String::from("stops")));
        }
        if self.trips.is_empty() {
            return Err(FeedError::EmptyFeed(String::from("trips")));
        }
        for trip in self.trips.iter() {
            let ordered = trip
                .stop_times
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.stop_sequence < b.stop_sequence);
            if !ordered {
                return Err(FeedError::UnorderedStopTimes {
                    trip_id: trip.trip_id.clone(),
                });
            }
        }
        for shape in self.shapes.iter() {
            let ordered = shape
                .points
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.sequence < b.sequence);
            if !ordered {
                return Err(FeedError::UnorderedShapePoints {
                    shape_id: shape.shape_id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn stops_by_id(&self) -> HashMap<&str, &Stop> {
        self.stops.iter().map(|s| (s.stop_id.as_str(), s)).collect()
    }

    pub fn routes_by_id(&self) -> HashMap<&str, &Route> {
        self.routes
            .iter()
            .map(|r| (r.route_id.as_str(), r))
            .collect()
    }

    pub fn shapes_by_id(&self) -> HashMap<&str, &Shape> {
        self.shapes
            .iter()
            .map(|s| (s.shape_id.as_str(), s))
            .collect()
    }
}
