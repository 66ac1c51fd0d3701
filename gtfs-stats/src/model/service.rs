use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::date_codec;

/// a weekly service pattern from calendar.txt: the service identified by
/// `service_id` runs on the flagged weekdays for every date within the
/// inclusive [start_date, end_date] range.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalendarPattern {
    pub service_id: String,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    #[serde(with = "date_codec::gtfs")]
    pub start_date: NaiveDate,
    #[serde(with = "date_codec::gtfs")]
    pub end_date: NaiveDate,
}

impl CalendarPattern {
    /// a pattern running every day of the given inclusive date range.
    pub fn daily(service_id: &str, start_date: NaiveDate, end_date: NaiveDate) -> CalendarPattern {
        CalendarPattern {
            service_id: service_id.to_string(),
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: true,
            sunday: true,
            start_date,
            end_date,
        }
    }

    pub fn runs_on_weekday(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start_date <= *date && *date <= self.end_date
    }
}

/// whether a calendar exception adds or removes service on its date.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionType {
    Added,
    Removed,
}

/// a single-date override from calendar_dates.txt. exceptions take
/// precedence over the weekly pattern in both directions: `Added` forces a
/// service active even without any pattern, `Removed` forces it inactive
/// even when the pattern says it runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalendarException {
    pub service_id: String,
    #[serde(with = "date_codec::gtfs")]
    pub date: NaiveDate,
    pub exception_type: ExceptionType,
}

impl CalendarException {
    pub fn new(service_id: &str, date: NaiveDate, exception_type: ExceptionType) -> CalendarException {
        CalendarException {
            service_id: service_id.to_string(),
            date,
            exception_type,
        }
    }
}
