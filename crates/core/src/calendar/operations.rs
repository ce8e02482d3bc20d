use super::arithmetic::YearMonth;
use super::error::GridError;
use super::types::{CalendarEvent, EventRecord, EventSpan};

/// Filters events relevant to the given zero-based month.
///
/// Recurring events always pass. Single dates pass when they fall within the
/// month, ranges when they overlap it.
pub fn filter_events(month0: u32, year: i32, events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    let target = YearMonth::new(year, month0);

    events
        .iter()
        .filter(|event| {
            event.is_recurrent
                || match event.span {
                    EventSpan::Date(date) => target.contains(date),
                    EventSpan::Range { start, end } => {
                        YearMonth::of(start) <= target && YearMonth::of(end) >= target
                    }
                }
        })
        .collect()
}

/// Validates an event before it is laid out.
pub fn validate_event(event: &CalendarEvent) -> Result<(), GridError> {
    match event.span {
        EventSpan::Range { start, end } if end < start => {
            Err(GridError::InvalidRange { start, end })
        }
        _ => Ok(()),
    }
}

/// Validates every event, failing on the first invalid one.
pub fn validate_events(events: &[CalendarEvent]) -> Result<(), GridError> {
    events.iter().try_for_each(validate_event)
}

/// Converts wire records into events, dropping records with an unusable shape.
pub fn events_from_records(records: impl IntoIterator<Item = EventRecord>) -> Vec<CalendarEvent> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match CalendarEvent::try_from(record) {
            Ok(event) => Some(event),
            Err(error) => {
                tracing::debug!(index, %error, "Dropping malformed event record");
                None
            }
        })
        .collect()
}
