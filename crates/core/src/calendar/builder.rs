use chrono::NaiveDate;
use serde::Serialize;

use super::arithmetic::{minus_month, plus_month, YearMonth};
use super::error::GridError;
use super::grid::generate_month_grid;
use super::normalize::normalize_events;
use super::operations::{filter_events, validate_events};
use super::placement::place_events;
use super::types::{CalendarEvent, Cell};

/// Computes the ordered cells of a zero-based month: event bars first, then
/// the day grid flattened row-major.
///
/// # Example
///
/// ```
/// use monthgrid_core::calendar::compute_month_cells;
///
/// // September 2019 starts on a Sunday, so six August days lead row 0.
/// let cells = compute_month_cells(8, 2019, &[]).unwrap();
///
/// assert_eq!(cells.len(), 42);
/// assert_eq!(cells[0].value, "26");
/// assert_eq!(cells[6].value, "1");
/// assert!(cells[6].is_current_month);
/// ```
pub fn compute_month_cells(
    month0: u32,
    year: i32,
    events: &[CalendarEvent],
) -> Result<Vec<Cell>, GridError> {
    MonthGridBuilder::new(events).build(YearMonth::new(year, month0))
}

/// Lays out months over a borrowed set of events.
#[derive(Debug, Clone, Copy)]
pub struct MonthGridBuilder<'a> {
    events: &'a [CalendarEvent],
}

/// The cells of the months on either side of a date, plus its own month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthTriple {
    pub prev: Vec<Cell>,
    pub current: Vec<Cell>,
    pub next: Vec<Cell>,
}

impl<'a> MonthGridBuilder<'a> {
    pub fn new(events: &'a [CalendarEvent]) -> Self {
        Self { events }
    }

    /// Computes the cells of one month.
    ///
    /// Every range event is validated first, so a reversed range fails the
    /// build whichever month is requested.
    pub fn build(&self, month: YearMonth) -> Result<Vec<Cell>, GridError> {
        validate_events(self.events)?;

        let filtered = filter_events(month.month0(), month.year(), self.events);
        let normalized = normalize_events(&filtered, month);
        let grid = generate_month_grid(
            month.days_in_month(),
            month.first_weekday(),
            month.previous().days_in_month(),
            &normalized,
        );
        let mut cells = place_events(&filtered, &grid, month)?;

        tracing::trace!(
            year = month.year(),
            month0 = month.month0(),
            events = filtered.len(),
            bars = cells.len(),
            rows = grid.row_count(),
            "Built month grid"
        );

        cells.extend(grid.into_cells());
        Ok(cells)
    }

    /// Computes the previous, current and next months around `date`.
    pub fn build_triple(&self, date: NaiveDate) -> Result<MonthTriple, GridError> {
        Ok(MonthTriple {
            prev: self.build(YearMonth::of(minus_month(date)))?,
            current: self.build(YearMonth::of(date))?,
            next: self.build(YearMonth::of(plus_month(date)))?,
        })
    }
}
