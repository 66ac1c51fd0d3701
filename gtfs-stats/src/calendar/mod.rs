mod calendar_error;
mod date_span;
mod resolver;

pub use calendar_error::CalendarError;
pub use date_span::DateSpan;
pub use resolver::CalendarResolver;
