use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when laying out a month grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Range end {end} precedes its start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Reasons an event record cannot be turned into a calendar event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedEvent {
    #[error("Event has neither a date nor a start/end pair")]
    MissingDates,
    #[error("Range event is missing its start date")]
    MissingStart,
    #[error("Range event is missing its end date")]
    MissingEnd,
}
