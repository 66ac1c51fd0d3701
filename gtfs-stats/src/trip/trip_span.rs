use crate::time::ServiceTime;

/// the parsed endpoint times of a trip: both fields of its first and last
/// stop visits. all spans are on the linear service-day axis, so durations
/// crossing midnight stay positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripSpan {
    pub first_arrival: Option<ServiceTime>,
    pub first_departure: Option<ServiceTime>,
    pub last_arrival: Option<ServiceTime>,
    pub last_departure: Option<ServiceTime>,
}

impl TripSpan {
    /// when the vehicle starts running: the first departure, falling back
    /// to the first arrival.
    pub fn start(&self) -> Option<ServiceTime> {
        self.first_departure.or(self.first_arrival)
    }

    /// when the vehicle stops running: the last departure, falling back to
    /// the last arrival.
    pub fn end(&self) -> Option<ServiceTime> {
        self.last_departure.or(self.last_arrival)
    }

    /// signed trip duration in seconds: last departure minus first arrival,
    /// each falling back to its sibling field when absent. None when either
    /// endpoint has no time at all; negative values indicate times that
    /// decrease along the stop sequence.
    pub fn duration_seconds(&self) -> Option<i64> {
        let begin = self.first_arrival.or(self.first_departure)?;
        let finish = self.last_departure.or(self.last_arrival)?;
        Some(begin.seconds_until(&finish))
    }
}

#[cfg(test)]
mod test {
    use super::TripSpan;
    use crate::time::ServiceTime;

    fn time(text: &str) -> Option<ServiceTime> {
        Some(ServiceTime::parse(text).expect("should parse"))
    }

    #[test]
    fn test_duration_crossing_midnight_is_positive() {
        let span = TripSpan {
            first_arrival: time("23:30:00"),
            first_departure: time("23:30:00"),
            last_arrival: time("24:15:00"),
            last_departure: time("24:15:00"),
        };
        assert_eq!(span.duration_seconds(), Some(2700));
    }

    #[test]
    fn test_duration_is_translation_invariant() {
        let base = TripSpan {
            first_arrival: time("08:00:00"),
            first_departure: time("08:01:00"),
            last_arrival: time("08:44:00"),
            last_departure: time("08:45:00"),
        };
        let shifted = TripSpan {
            first_arrival: time("22:00:00"),
            first_departure: time("22:01:00"),
            last_arrival: time("22:44:00"),
            last_departure: time("22:45:00"),
        };
        assert_eq!(span_secs(&base), span_secs(&shifted));

        fn span_secs(span: &TripSpan) -> i64 {
            span.duration_seconds().expect("should have duration")
        }
    }

    #[test]
    fn test_endpoints_fall_back_to_the_other_field() {
        let span = TripSpan {
            first_arrival: None,
            first_departure: time("08:00:00"),
            last_arrival: time("08:30:00"),
            last_departure: None,
        };
        assert_eq!(span.duration_seconds(), Some(1800));
        assert_eq!(span.start(), time("08:00:00"));
        assert_eq!(span.end(), time("08:30:00"));
    }

    #[test]
    fn test_missing_endpoint_yields_no_duration() {
        let span = TripSpan {
            first_arrival: None,
            first_departure: None,
            last_arrival: time("08:30:00"),
            last_departure: time("08:30:00"),
        };
        assert_eq!(span.duration_seconds(), None);
    }
}
