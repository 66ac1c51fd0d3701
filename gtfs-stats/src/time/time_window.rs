use serde::{Deserialize, Serialize};

use crate::time::{service_time::ServiceTime, time_error::TimeError};

/// a half-open time-of-day interval [start, end) on the service-day axis.
/// since service times are linear past 24:00:00, a window may span midnight
/// without any special casing (e.g. 23:00:00 to 27:00:00).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: ServiceTime,
    pub end: ServiceTime,
}

impl TimeWindow {
    pub fn new(start: ServiceTime, end: ServiceTime) -> Result<TimeWindow, TimeError> {
        if end <= start {
            return Err(TimeError::WindowOutOfOrder {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(TimeWindow { start, end })
    }

    pub fn contains(&self, time: &ServiceTime) -> bool {
        self.start <= *time && *time < self.end
    }
}

#[cfg(test)]
mod test {
    use super::TimeWindow;
    use crate::time::{ServiceTime, TimeError};

    #[test]
    fn test_window_is_half_open() {
        let window = TimeWindow::new(
            ServiceTime::from_seconds(3600),
            ServiceTime::from_seconds(7200),
        )
        .expect("should build");
        assert!(window.contains(&ServiceTime::from_seconds(3600)));
        assert!(window.contains(&ServiceTime::from_seconds(7199)));
        assert!(!window.contains(&ServiceTime::from_seconds(7200)));
        assert!(!window.contains(&ServiceTime::from_seconds(3599)));
    }

    #[test]
    fn test_window_may_cross_midnight() {
        let window = TimeWindow::new(
            ServiceTime::parse("23:00:00").expect("should parse"),
            ServiceTime::parse("27:00:00").expect("should parse"),
        )
        .expect("should build");
        assert!(window.contains(&ServiceTime::parse("25:30:00").expect("should parse")));
        assert!(!window.contains(&ServiceTime::parse("22:00:00").expect("should parse")));
    }

    #[test]
    fn test_reversed_window_is_rejected() {
        let result = TimeWindow::new(
            ServiceTime::from_seconds(7200),
            ServiceTime::from_seconds(3600),
        );
        assert!(matches!(result, Err(TimeError::WindowOutOfOrder { .. })));
    }
}
