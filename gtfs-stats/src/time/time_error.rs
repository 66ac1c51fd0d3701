#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Unparseable GTFS time '{0}', expected HH:MM:SS with HH >= 0")]
    MalformedTime(String),
    #[error("Time window start {start} is not before end {end}")]
    WindowOutOfOrder { start: String, end: String },
}
