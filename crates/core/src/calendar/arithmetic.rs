use std::ops::RangeInclusive;

use chrono::{Datelike, Days, NaiveDate};

/// Years are clamped into this range so every month has a representable first day.
const MIN_YEAR: i32 = -262_000;
const MAX_YEAR: i32 = 262_000;

/// A calendar month identified by year and zero-based month.
///
/// Ordering compares the year first, then the month, so ranges spanning a
/// year boundary compare correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month0: u32,
}

impl YearMonth {
    /// Creates a month, carrying `month0 >= 12` into the following years.
    pub fn new(year: i32, month0: u32) -> Self {
        let carry = (month0 / 12) as i32;
        Self {
            year: year.saturating_add(carry).clamp(MIN_YEAR, MAX_YEAR),
            month0: month0 % 12,
        }
    }

    /// Returns the month containing the given date.
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (January = 0).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Returns the first day of this month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Returns the number of days in this month.
    pub fn days_in_month(&self) -> u32 {
        match self.month0 {
            1 if is_leap_year(self.year) => 29,
            1 => 28,
            3 | 5 | 8 | 10 => 30,
            _ => 31,
        }
    }

    /// Returns the weekday of day 1, counted from Sunday (Sunday = 0).
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn previous(&self) -> Self {
        Self::of(minus_month(self.first_day()))
    }

    pub fn next(&self) -> Self {
        Self::of(plus_month(self.first_day()))
    }

    /// Returns true if the date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    /// Clips an inclusive date range to the days of this month.
    ///
    /// Returns `None` when the range does not touch this month. A range that
    /// began in an earlier month starts at day 1, one that ends in a later
    /// month stops at the last day. The returned range is empty when `end`
    /// precedes `start` inside this month.
    pub fn clip(&self, start: NaiveDate, end: NaiveDate) -> Option<RangeInclusive<u32>> {
        let (start_month, end_month) = (Self::of(start), Self::of(end));
        if start_month > *self || end_month < *self {
            return None;
        }

        let from = if start_month < *self { 1 } else { start.day() };
        let to = if end_month > *self {
            self.days_in_month()
        } else {
            end.day()
        };
        Some(from..=to)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given zero-based month.
pub fn days_in_month(month0: u32, year: i32) -> u32 {
    YearMonth::new(year, month0).days_in_month()
}

/// Returns the weekday (Sunday = 0) of the first day of the month.
pub fn first_weekday(month0: u32, year: i32) -> u32 {
    YearMonth::new(year, month0).first_weekday()
}

/// Returns the zero-based month preceding the given one.
pub fn previous_month(month0: u32, year: i32) -> u32 {
    YearMonth::new(year, month0).previous().month0()
}

/// Moves a date to "day 0" of its month: the last day of the previous month.
pub fn minus_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

/// Moves a date to "day 32" of its month, which always lands in the next month.
pub fn plus_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_add_days(Days::new(31)))
        .unwrap_or(date)
}

/// Maps a weekday counted from Sunday to its Monday-first grid column.
pub fn weekday_column(weekday: u32) -> usize {
    ((weekday + 6) % 7) as usize
}

/// Maps a Monday-first grid column back to a weekday counted from Sunday.
pub fn column_weekday(col: usize) -> u32 {
    ((col + 1) % 7) as u32
}

/// Returns the Monday-first grid column of a date.
pub fn date_column(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}
