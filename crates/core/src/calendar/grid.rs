use super::arithmetic::{column_weekday, weekday_column};
use super::types::{Cell, NormalizedEvents};

/// Number of columns in a grid row.
pub const WEEK_LEN: usize = 7;
/// Maximum number of rows a month can need.
pub const MAX_ROWS: usize = 6;

/// The plain day cells of a month, one Monday-first row per week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    rows: Vec<[Cell; WEEK_LEN]>,
    leading: usize,
    max_day: u32,
}

impl MonthGrid {
    pub fn rows(&self) -> &[[Cell; WEEK_LEN]] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    /// Returns the (row, col) of a day of the current month.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        if day == 0 || day > self.max_day {
            return None;
        }
        let index = self.leading + day as usize - 1;
        Some((index / WEEK_LEN, index % WEEK_LEN))
    }

    /// Flattens the grid row-major.
    pub fn into_cells(self) -> Vec<Cell> {
        self.rows.into_iter().flatten().collect()
    }
}

/// Builds the day grid of a month.
///
/// `first_weekday` counts from Sunday. Row 0 starts with the trailing days of
/// the previous month, and the last row is completed with days of the next
/// month. Rows are only started while days of the month remain, so the grid
/// has between four and six rows.
pub fn generate_month_grid(
    max_day: u32,
    first_weekday: u32,
    days_in_prev: u32,
    normalized: &NormalizedEvents,
) -> MonthGrid {
    let leading = weekday_column(first_weekday);
    let mut rows = Vec::with_capacity(MAX_ROWS);
    let mut date = 1;
    let mut next_date = 1;

    for row in 0..MAX_ROWS {
        if date > max_day {
            break;
        }

        let cells = std::array::from_fn(|col| {
            if row == 0 && col < leading {
                let value = (days_in_prev as usize + col + 1).saturating_sub(leading);
                Cell::day(value.to_string(), row, col, false)
            } else if date > max_day {
                let cell = Cell::day(next_date.to_string(), row, col, false);
                next_date += 1;
                cell
            } else {
                let mut cell = Cell::day(date.to_string(), row, col, true);
                cell.with_event = normalized.touches(column_weekday(col), date);
                date += 1;
                cell
            }
        });
        rows.push(cells);
    }

    MonthGrid {
        rows,
        leading,
        max_day,
    }
}
