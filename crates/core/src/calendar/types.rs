use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::MalformedEvent;
use crate::serde::{deserialize_optional_date, deserialize_optional_string};

/// The dates an event covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSpan {
    /// A single calendar date.
    Date(NaiveDate),
    /// An inclusive date range.
    Range { start: NaiveDate, end: NaiveDate },
}

impl EventSpan {
    /// Returns the first date covered by this span.
    pub fn start_date(&self) -> NaiveDate {
        match self {
            EventSpan::Date(date) => *date,
            EventSpan::Range { start, .. } => *start,
        }
    }

    /// Returns the last date covered by this span.
    pub fn end_date(&self) -> NaiveDate {
        match self {
            EventSpan::Date(date) => *date,
            EventSpan::Range { end, .. } => *end,
        }
    }

    /// Returns true if this span is a date range.
    pub fn is_range(&self) -> bool {
        matches!(self, EventSpan::Range { .. })
    }
}

/// A calendar event overlaid on the month grid.
///
/// Recurring events repeat every week on the weekday (or weekday span) of
/// their dates; the year and month of those dates are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord", into = "EventRecord")]
pub struct CalendarEvent {
    pub span: EventSpan,
    pub is_recurrent: bool,
    /// Renderer key the view layer uses to draw this event's bars.
    pub renderer: Option<String>,
    pub title: Option<String>,
}

impl CalendarEvent {
    /// Creates a single-date event.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            span: EventSpan::Date(date),
            is_recurrent: false,
            renderer: None,
            title: None,
        }
    }

    /// Creates a date-range event.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            span: EventSpan::Range { start, end },
            is_recurrent: false,
            renderer: None,
            title: None,
        }
    }

    /// Marks this event as repeating weekly.
    pub fn recurring(mut self) -> Self {
        self.is_recurrent = true;
        self
    }

    /// Sets the renderer key for this event.
    pub fn with_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = Some(renderer.into());
        self
    }

    /// Sets the title for this event.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start_date(&self) -> NaiveDate {
        self.span.start_date()
    }
}

/// Loose wire shape of an event, as supplied by event feeds.
///
/// Which of `date` or `start`/`end` is present decides the event's shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub is_recurrent: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub renderer: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
}

impl TryFrom<EventRecord> for CalendarEvent {
    type Error = MalformedEvent;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let span = match (record.date, record.start, record.end) {
            (Some(date), _, _) => EventSpan::Date(date),
            (None, Some(start), Some(end)) => EventSpan::Range { start, end },
            (None, None, None) => return Err(MalformedEvent::MissingDates),
            (None, None, Some(_)) => return Err(MalformedEvent::MissingStart),
            (None, Some(_), None) => return Err(MalformedEvent::MissingEnd),
        };

        Ok(Self {
            span,
            is_recurrent: record.is_recurrent,
            renderer: record.renderer,
            title: record.title,
        })
    }
}

impl From<CalendarEvent> for EventRecord {
    fn from(event: CalendarEvent) -> Self {
        let (date, start, end) = match event.span {
            EventSpan::Date(date) => (Some(date), None, None),
            EventSpan::Range { start, end } => (None, Some(start), Some(end)),
        };

        Self {
            date,
            start,
            end,
            is_recurrent: event.is_recurrent,
            renderer: event.renderer,
            title: event.title,
        }
    }
}

/// Presence sets used to flag plain day cells touched by an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedEvents {
    /// Weekdays (Sunday = 0) touched by a recurring event.
    pub recurrent_by_weekday: BTreeSet<u32>,
    /// Days of the month touched by a non-recurring event.
    pub dates_by_day: BTreeSet<u32>,
}

impl NormalizedEvents {
    /// Returns true if a day with the given weekday and day-of-month is touched.
    pub fn touches(&self, weekday: u32, day: u32) -> bool {
        self.recurrent_by_weekday.contains(&weekday) || self.dates_by_day.contains(&day)
    }
}

/// One positioned element of the month view: a day cell or an event bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Day number shown in the cell, possibly from an adjacent month.
    pub value: String,
    pub row: usize,
    /// Monday-first column (Monday = 0, Sunday = 6).
    pub col: usize,
    /// Number of columns an event bar covers, starting at `col`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col_span: Option<usize>,
    pub is_current_month: bool,
    pub is_event: bool,
    pub with_event: bool,
    /// Event payload, present on event bars only.
    #[serde(flatten)]
    pub event: Option<CalendarEvent>,
}

impl Cell {
    /// Creates a plain day cell.
    pub fn day(value: impl Into<String>, row: usize, col: usize, is_current_month: bool) -> Self {
        Self {
            value: value.into(),
            row,
            col,
            col_span: None,
            is_current_month,
            is_event: false,
            with_event: false,
            event: None,
        }
    }

    /// Creates an event bar starting on this cell.
    pub fn to_bar(&self, event: &CalendarEvent, col_span: usize) -> Self {
        Self {
            col_span: Some(col_span),
            is_event: true,
            with_event: false,
            event: Some(event.clone()),
            ..self.clone()
        }
    }
}
