use serde::{Deserialize, Serialize};

use crate::report::{StatsReport, Warning};
use crate::time::ServiceTime;
use crate::trip::trip_span::TripSpan;

/// date-independent statistics of a single trip. duration and speed are
/// None when the trip's endpoint times are missing or disordered; such
/// trips are excluded from duration-bearing aggregates but still listed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TripSummary {
    pub trip_id: String,
    pub route_id: String,
    pub service_id: String,
    pub num_stops: usize,
    pub start_time: Option<ServiceTime>,
    pub end_time: Option<ServiceTime>,
    pub distance: uom::si::f64::Length,
    pub duration: Option<uom::si::f64::Time>,
    pub speed: Option<uom::si::f64::Velocity>,
    pub is_loop: bool,
}

impl TripSummary {
    /// assembles a summary from the trip's resolved span and distance,
    /// reporting trips whose duration cannot be established.
    pub fn build(
        trip_id: &str,
        route_id: &str,
        service_id: &str,
        num_stops: usize,
        span: &TripSpan,
        distance: uom::si::f64::Length,
        is_loop: bool,
        report: &mut StatsReport,
    ) -> TripSummary {
        let duration = match span.duration_seconds() {
            Some(seconds) if seconds >= 0 => Some(uom::si::f64::Time::new::<
                uom::si::time::second,
            >(seconds as f64)),
            Some(_) => {
                report.exclude_trip(Warning::DisorderedTripTimes {
                    trip_id: trip_id.to_string(),
                });
                None
            }
            None => {
                report.exclude_trip(Warning::IncompleteTripTimes {
                    trip_id: trip_id.to_string(),
                });
                None
            }
        };
        let speed = duration.and_then(|dur| {
            let seconds = dur.get::<uom::si::time::second>();
            if seconds > 0.0 {
                let meters = distance.get::<uom::si::length::meter>();
                Some(uom::si::f64::Velocity::new::<
                    uom::si::velocity::meter_per_second,
                >(meters / seconds))
            } else {
                None
            }
        });
        TripSummary {
            trip_id: trip_id.to_string(),
            route_id: route_id.to_string(),
            service_id: service_id.to_string(),
            num_stops,
            start_time: span.start(),
            end_time: span.end(),
            distance,
            duration,
            speed,
            is_loop,
        }
    }
}

#[cfg(test)]
mod test {
    use super::TripSummary;
    use crate::report::{StatsReport, Warning};
    use crate::time::ServiceTime;
    use crate::trip::TripSpan;
    use approx::assert_relative_eq;

    fn span(first: &str, last: &str) -> TripSpan {
        let first = ServiceTime::parse(first).expect("should parse");
        let last = ServiceTime::parse(last).expect("should parse");
        TripSpan {
            first_arrival: Some(first),
            first_departure: Some(first),
            last_arrival: Some(last),
            last_departure: Some(last),
        }
    }

    fn km(meters: f64) -> uom::si::f64::Length {
        uom::si::f64::Length::new::<uom::si::length::meter>(meters)
    }

    #[test]
    fn test_speed_is_distance_over_duration() {
        let mut report = StatsReport::new();
        let summary = TripSummary::build(
            "t1",
            "r1",
            "svc",
            12,
            &span("08:00:00", "08:15:00"),
            km(5000.0),
            false,
            &mut report,
        );
        let speed = summary.speed.expect("should have speed");
        assert_relative_eq!(
            speed.get::<uom::si::velocity::meter_per_second>(),
            5000.0 / 900.0
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_missing_endpoints_exclude_duration() {
        let mut report = StatsReport::new();
        let summary = TripSummary::build(
            "t1",
            "r1",
            "svc",
            2,
            &TripSpan::default(),
            km(5000.0),
            false,
            &mut report,
        );
        assert!(summary.duration.is_none());
        assert!(summary.speed.is_none());
        assert!(matches!(
            report.warnings.as_slice(),
            [Warning::IncompleteTripTimes { .. }]
        ));
        assert_eq!(report.excluded_trips, 1);
    }

    #[test]
    fn test_decreasing_times_are_reported_as_disordered() {
        let mut report = StatsReport::new();
        let summary = TripSummary::build(
            "t1",
            "r1",
            "svc",
            2,
            &span("09:00:00", "08:00:00"),
            km(5000.0),
            false,
            &mut report,
        );
        assert!(summary.duration.is_none());
        assert!(matches!(
            report.warnings.as_slice(),
            [Warning::DisorderedTripTimes { .. }]
        ));
    }
}
