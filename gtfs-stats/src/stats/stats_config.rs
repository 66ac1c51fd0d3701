use serde::{Deserialize, Serialize};

use crate::time::{ServiceTime, TimeField, TimeWindow};
use crate::trip::TripDistancePolicy;

/// engine-wide computation policy, fixed for the engine's lifetime.
/// query-specific scope (dates, windows, filters) travels in a
/// [`crate::stats::StatsRequest`] instead.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct StatsConfig {
    /// when true, any data-quality finding other than degenerate geometry
    /// aborts the run instead of excluding the offending entity
    pub strict: bool,
    pub distance_policy: TripDistancePolicy,
    /// which stop-time field positions visits by default; a request may
    /// override it per query
    pub time_field: TimeField,
    /// window for route-level headway gaps between trip starts, unless the
    /// request carries its own window
    pub headway_window: TimeWindow,
}

impl Default for StatsConfig {
    fn default() -> StatsConfig {
        StatsConfig {
            strict: false,
            distance_policy: TripDistancePolicy::default(),
            time_field: TimeField::default(),
            headway_window: default_headway_window(),
        }
    }
}

/// 07:00:00 to 19:00:00, the conventional daytime service window.
fn default_headway_window() -> TimeWindow {
    TimeWindow {
        start: ServiceTime::from_seconds(7 * 3600),
        end: ServiceTime::from_seconds(19 * 3600),
    }
}

#[cfg(test)]
mod test {
    use super::StatsConfig;
    use crate::time::TimeField;
    use crate::trip::TripDistancePolicy;

    #[test]
    fn test_defaults_match_documented_policy() {
        let config = StatsConfig::default();
        assert!(!config.strict);
        assert_eq!(config.distance_policy, TripDistancePolicy::ShapePreferred);
        assert_eq!(config.time_field, TimeField::Departure);
        assert_eq!(config.headway_window.start.as_seconds(), 25200);
        assert_eq!(config.headway_window.end.as_seconds(), 68400);
    }

    #[test]
    fn test_partial_json_fills_in_defaults() {
        let config: StatsConfig =
            serde_json::from_str(r#"{"strict": true}"#).expect("should deserialize");
        assert!(config.strict);
        assert_eq!(config.time_field, TimeField::Departure);
    }
}
