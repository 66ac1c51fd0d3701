use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::time::time_error::TimeError;

/// a GTFS time of day measured in whole seconds since service midnight.
///
/// GTFS times are written HH:MM:SS where the hour may exceed 23 in order to
/// represent service running past midnight within the same service day
/// (25:30:00 is "1:30 am the next morning" on this service day). values are
/// kept on a single linear axis so that arithmetic and ordering never wrap
/// at 24 hours.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(transparent)]
pub struct ServiceTime(u32);

impl ServiceTime {
    pub const fn from_seconds(seconds: u32) -> ServiceTime {
        ServiceTime(seconds)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    /// parses an HH:MM:SS string where HH has one or more digits and may
    /// exceed 23 (at least two full service days are representable). minutes
    /// and seconds must be exactly two digits below 60.
    pub fn parse(text: &str) -> Result<ServiceTime, TimeError> {
        let malformed = || TimeError::MalformedTime(text.to_string());
        let mut fields = text.trim().split(':');
        let (h, m, s) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(h), Some(m), Some(s), None) => (h, m, s),
            _ => return Err(malformed()),
        };
        if h.is_empty() || m.len() != 2 || s.len() != 2 {
            return Err(malformed());
        }
        for field in [h, m, s] {
            if !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
        }
        let hours: u32 = h.parse().map_err(|_| malformed())?;
        let minutes: u32 = m.parse().map_err(|_| malformed())?;
        let seconds: u32 = s.parse().map_err(|_| malformed())?;
        if minutes > 59 || seconds > 59 {
            return Err(malformed());
        }
        let total = hours
            .checked_mul(3600)
            .and_then(|t| t.checked_add(minutes * 60))
            .and_then(|t| t.checked_add(seconds))
            .ok_or_else(malformed)?;
        Ok(ServiceTime(total))
    }

    /// signed difference in seconds from this time to `later`. the result is
    /// negative when `later` precedes `self`; no modulo-24h wrapping occurs,
    /// so a span crossing midnight (23:30:00 to 24:15:00) stays positive.
    pub fn seconds_until(&self, later: &ServiceTime) -> i64 {
        i64::from(later.0) - i64::from(self.0)
    }
}

impl Display for ServiceTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod test {
    use super::ServiceTime;
    use crate::time::TimeError;

    #[test]
    fn test_parse_morning_time() {
        let time = ServiceTime::parse("08:30:00").expect("should parse");
        assert_eq!(time.as_seconds(), 30600);
    }

    #[test]
    fn test_parse_single_digit_hour() {
        let time = ServiceTime::parse("8:05:09").expect("should parse");
        assert_eq!(time.as_seconds(), 8 * 3600 + 5 * 60 + 9);
    }

    #[test]
    fn test_parse_rollover_times() {
        let midnight = ServiceTime::parse("24:00:00").expect("should parse");
        assert_eq!(midnight.as_seconds(), 86400);
        let late = ServiceTime::parse("25:30:00").expect("should parse");
        assert_eq!(late.as_seconds(), 91800);
        let two_days = ServiceTime::parse("47:59:59").expect("should parse");
        assert_eq!(two_days.as_seconds(), 47 * 3600 + 59 * 60 + 59);
    }

    #[test]
    fn test_parse_rejects_malformed_strings() {
        for bad in [
            "", "08:30", "08:30:00:00", "xx:00:00", "08:61:00", "08:00:61", "08:5:00", "-8:00:00",
            "+8:00:00", "08 30 00",
        ] {
            let result = ServiceTime::parse(bad);
            assert!(
                matches!(result, Err(TimeError::MalformedTime(_))),
                "'{}' should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_difference_is_linear_across_midnight() {
        let start = ServiceTime::parse("23:30:00").expect("should parse");
        let end = ServiceTime::parse("24:15:00").expect("should parse");
        assert_eq!(start.seconds_until(&end), 2700);
        assert_eq!(end.seconds_until(&start), -2700);
    }

    #[test]
    fn test_display_preserves_rollover_hours() {
        let time = ServiceTime::parse("25:30:07").expect("should parse");
        assert_eq!(time.to_string(), "25:30:07");
    }

    #[test]
    fn test_serde_round_trip_as_seconds() {
        let time = ServiceTime::from_seconds(30600);
        let json = serde_json::to_string(&time).expect("should serialize");
        assert_eq!(json, "30600");
        let back: ServiceTime = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, time);
    }
}
