use crate::calendar::CalendarError;
use crate::model::FeedError;
use crate::projection::ProjectionError;
use crate::report::Warning;
use crate::time::TimeError;

/// hard failures of the statistics engine. data-quality findings are not
/// errors by default; they travel in the [`crate::report::StatsReport`]
/// unless strict mode promotes them.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("Request contains no dates")]
    EmptyDateRange,
    #[error("Strict mode abort: {0}")]
    StrictModeViolation(Warning),
}
