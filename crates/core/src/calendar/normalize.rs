use chrono::{Datelike, NaiveDate};

use super::arithmetic::YearMonth;
use super::types::{CalendarEvent, EventSpan, NormalizedEvents};

/// Reduces filtered events to the weekday and day-of-month sets of a month.
///
/// A recurring range marks every weekday between its start and end weekdays,
/// whichever comes first in the week. Non-recurring ranges only mark the days
/// that fall within `month`.
pub fn normalize_events(events: &[&CalendarEvent], month: YearMonth) -> NormalizedEvents {
    let mut normalized = NormalizedEvents::default();

    for event in events {
        match (&event.span, event.is_recurrent) {
            (EventSpan::Date(date), true) => {
                normalized.recurrent_by_weekday.insert(weekday(*date));
            }
            (EventSpan::Range { start, end }, true) => {
                let (a, b) = (weekday(*start), weekday(*end));
                normalized.recurrent_by_weekday.extend(a.min(b)..=a.max(b));
            }
            (EventSpan::Date(date), false) => {
                if month.contains(*date) {
                    normalized.dates_by_day.insert(date.day());
                }
            }
            (EventSpan::Range { start, end }, false) => {
                if let Some(days) = month.clip(*start, *end) {
                    normalized.dates_by_day.extend(days);
                }
            }
        }
    }

    normalized
}

fn weekday(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}
