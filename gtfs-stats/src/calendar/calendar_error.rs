use chrono::NaiveDate;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Multiple calendar exceptions for service '{service_id}' on {date}: pattern overrides must be unambiguous")]
    AmbiguousCalendarException {
        service_id: String,
        date: NaiveDate,
    },
}
