//! network-level operational statistics for GTFS schedules.
//!
//! consumes already-parsed GTFS tables (stops, routes, trips, stop times,
//! shapes, calendars) and computes per-route, per-stop, per-trip and
//! feed-wide service metrics for one or more service dates. all
//! computation is in-memory; feed loading and result export belong to the
//! caller.

pub mod calendar;
pub mod model;
pub mod projection;
pub mod report;
pub mod stats;
pub mod time;
pub mod trip;

pub use stats::{StatsConfig, StatsEngine, StatsError, StatsRequest};
