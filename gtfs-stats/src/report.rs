//! data-quality reporting. statistics queries always return their results
//! together with the report collected while computing them, so callers can
//! decide whether partial results are acceptable.

use serde::{Deserialize, Serialize};

use crate::time::TimeField;

/// a recoverable data-quality finding. by default the offending trip or
/// stop visit is excluded from aggregation and the computation continues;
/// in strict mode any finding except `DegenerateTripGeometry` aborts the
/// run instead.
#[derive(thiserror::Error, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Warning {
    #[error("Invalid coordinate at {location} (lon {lon}, lat {lat})")]
    InvalidCoordinate {
        location: String,
        lon: f64,
        lat: f64,
    },
    #[error("Unparseable {field:?} time '{value}' for trip '{trip_id}' at stop_sequence {stop_sequence}")]
    MalformedTime {
        trip_id: String,
        stop_sequence: u32,
        field: TimeField,
        value: String,
    },
    #[error("Missing both arrival and departure times for trip '{trip_id}' at stop_sequence {stop_sequence}")]
    MissingTime { trip_id: String, stop_sequence: u32 },
    #[error("Trip '{trip_id}' is missing its first arrival or last departure time")]
    IncompleteTripTimes { trip_id: String },
    #[error("Trip '{trip_id}' has times that decrease along its stop sequence")]
    DisorderedTripTimes { trip_id: String },
    #[error("Trip '{trip_id}' has fewer than 2 usable geometry points and contributes zero distance")]
    DegenerateTripGeometry { trip_id: String },
    #[error("Trip '{trip_id}' visits stop '{stop_id}' which is not in the stops table")]
    UnknownStop { trip_id: String, stop_id: String },
    #[error("Trip '{trip_id}' references shape '{shape_id}' which is not in the shapes table")]
    UnknownShape { trip_id: String, shape_id: String },
    #[error("Trip '{trip_id}' references route '{route_id}' which is not in the routes table")]
    UnknownRoute { trip_id: String, route_id: String },
}

impl Warning {
    /// whether this finding makes the underlying data wrong, as opposed to
    /// merely too sparse to measure. strict mode aborts on data errors;
    /// degenerate geometry stays a warning in both modes and contributes
    /// zero distance.
    pub fn is_data_error(&self) -> bool {
        !matches!(self, Warning::DegenerateTripGeometry { .. })
    }
}

/// the warnings accumulated over one engine build or query, plus counters
/// for entities the default policy excluded from aggregation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StatsReport {
    pub warnings: Vec<Warning>,
    /// trips excluded from duration-bearing aggregates
    pub excluded_trips: usize,
    /// stop visits excluded from visit counts and headways
    pub excluded_visits: usize,
}

impl StatsReport {
    pub fn new() -> StatsReport {
        StatsReport::default()
    }

    pub fn push(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// records a warning whose trip was excluded from aggregation.
    pub fn exclude_trip(&mut self, warning: Warning) {
        self.excluded_trips += 1;
        self.push(warning);
    }

    /// records a warning whose stop visit was excluded from aggregation.
    pub fn exclude_visit(&mut self, warning: Warning) {
        self.excluded_visits += 1;
        self.push(warning);
    }

    pub fn merge(&mut self, other: StatsReport) {
        self.excluded_trips += other.excluded_trips;
        self.excluded_visits += other.excluded_visits;
        self.warnings.extend(other.warnings);
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// the first data error, if any. used by strict mode to abort a run.
    pub fn first_data_error(&self) -> Option<&Warning> {
        self.warnings.iter().find(|w| w.is_data_error())
    }
}

#[cfg(test)]
mod test {
    use super::{StatsReport, Warning};

    #[test]
    fn test_degenerate_geometry_is_not_a_data_error() {
        let mut report = StatsReport::new();
        report.push(Warning::DegenerateTripGeometry {
            trip_id: String::from("t1"),
        });
        assert!(report.first_data_error().is_none());
        report.exclude_trip(Warning::IncompleteTripTimes {
            trip_id: String::from("t2"),
        });
        assert!(matches!(
            report.first_data_error(),
            Some(Warning::IncompleteTripTimes { .. })
        ));
        assert_eq!(report.excluded_trips, 1);
    }

    #[test]
    fn test_merge_accumulates_warnings_and_counters() {
        let mut a = StatsReport::new();
        a.exclude_visit(Warning::MissingTime {
            trip_id: String::from("t1"),
            stop_sequence: 2,
        });
        let mut b = StatsReport::new();
        b.exclude_visit(Warning::MissingTime {
            trip_id: String::from("t2"),
            stop_sequence: 5,
        });
        a.merge(b);
        assert_eq!(a.warnings.len(), 2);
        assert_eq!(a.excluded_visits, 2);
    }

    #[test]
    fn test_warnings_serialize_with_a_type_tag() {
        let warning = Warning::DegenerateTripGeometry {
            trip_id: String::from("t1"),
        };
        let json = serde_json::to_string(&warning).expect("should serialize");
        assert!(json.contains("\"type\":\"degenerate_trip_geometry\""));
    }
}
