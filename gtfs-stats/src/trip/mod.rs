mod distance_policy;
pub mod trip_ops;
mod trip_span;
mod trip_summary;

pub use distance_policy::TripDistancePolicy;
pub use trip_span::TripSpan;
pub use trip_summary::TripSummary;
