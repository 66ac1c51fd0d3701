mod service_time;
mod time_error;
mod time_field;
mod time_window;

pub use service_time::ServiceTime;
pub use time_error::TimeError;
pub use time_field::TimeField;
pub use time_window::TimeWindow;
