use chrono::{Datelike, NaiveDate};

use super::arithmetic::{date_column, YearMonth};
use super::error::GridError;
use super::grid::{MonthGrid, WEEK_LEN};
use super::types::{CalendarEvent, Cell, EventSpan};

/// Computes the event bars of a month.
///
/// Recurring bars come first, row by row and ordered by column within a row.
/// Non-recurring bars follow in start-date order; ranges are split into one
/// segment per grid row they cross and clipped to the month.
pub fn place_events(
    events: &[&CalendarEvent],
    grid: &MonthGrid,
    month: YearMonth,
) -> Result<Vec<Cell>, GridError> {
    let (mut recurrent, mut dated): (Vec<&CalendarEvent>, Vec<&CalendarEvent>) =
        events.iter().copied().partition(|event| event.is_recurrent);
    recurrent.sort_by_key(|event| date_column(event.start_date()));
    dated.sort_by_key(|event| event.start_date());

    let mut cells = Vec::new();

    for row in 0..grid.row_count() {
        cells.extend(
            recurrent
                .iter()
                .filter_map(|event| recurrent_bar(grid, row, event)),
        );
    }

    for event in dated {
        match event.span {
            EventSpan::Date(date) => {
                let start = grid
                    .position_of(date.day())
                    .filter(|_| month.contains(date))
                    .and_then(|(row, col)| grid.cell(row, col));
                if let Some(cell) = start {
                    cells.push(cell.to_bar(event, 1));
                }
            }
            EventSpan::Range { start, end } => {
                push_range_segments(grid, month, event, start, end, &mut cells)?;
            }
        }
    }

    Ok(cells)
}

/// The bar a recurring event draws on one row, if it starts on a day of the month.
fn recurrent_bar(grid: &MonthGrid, row: usize, event: &CalendarEvent) -> Option<Cell> {
    let cells = grid.rows().get(row)?;

    let (col, col_span) = match event.span {
        EventSpan::Date(date) => (date_column(date), 1),
        EventSpan::Range { start, end } => {
            let end_col = date_column(end);
            let mut col = date_column(start);
            while col < end_col && !cells[col].is_current_month {
                col += 1;
            }
            let tail = cells
                .iter()
                .take(end_col + 1)
                .skip(col + 1)
                .filter(|cell| cell.is_current_month)
                .count();
            (col, 1 + tail)
        }
    };

    let cell = &cells[col];
    cell.is_current_month.then(|| cell.to_bar(event, col_span))
}

fn push_range_segments(
    grid: &MonthGrid,
    month: YearMonth,
    event: &CalendarEvent,
    start: NaiveDate,
    end: NaiveDate,
    cells: &mut Vec<Cell>,
) -> Result<(), GridError> {
    let Some(days) = month.clip(start, end) else {
        return Ok(());
    };
    if days.is_empty() {
        return Err(GridError::InvalidRange { start, end });
    }
    let Some((mut row, mut col)) = grid.position_of(*days.start()) else {
        return Ok(());
    };

    let mut remaining = (days.end() - days.start() + 1) as usize;
    while remaining > 0 {
        let Some(cell) = grid.cell(row, col) else {
            break;
        };
        let col_span = remaining.min(WEEK_LEN - col);
        cells.push(cell.to_bar(event, col_span));
        remaining -= col_span;
        row += 1;
        col = 0;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::grid::generate_month_grid;
    use crate::calendar::normalize::normalize_events;
    use crate::calendar::types::NormalizedEvents;

    const JANUARY: u32 = 0;
    const FEBRUARY: u32 = 1;
    const APRIL: u32 = 3;
    const JUNE: u32 = 5;
    const JULY: u32 = 6;
    const AUGUST: u32 = 7;
    const SEPTEMBER: u32 = 8;

    /// Builds a date from a zero-based month.
    fn make_date(year: i32, month0: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month0 + 1, day).unwrap()
    }

    fn month_grid(month: YearMonth) -> MonthGrid {
        generate_month_grid(
            month.days_in_month(),
            month.first_weekday(),
            month.previous().days_in_month(),
            &NormalizedEvents::default(),
        )
    }

    fn place(events: &[CalendarEvent], month0: u32) -> Vec<Cell> {
        let month = YearMonth::new(2019, month0);
        let refs: Vec<&CalendarEvent> = events.iter().collect();
        place_events(&refs, &month_grid(month), month).unwrap()
    }

    /// (value, row, col, col_span) of each bar.
    fn layout(cells: &[Cell]) -> Vec<(&str, usize, usize, usize)> {
        cells
            .iter()
            .map(|cell| {
                (
                    cell.value.as_str(),
                    cell.row,
                    cell.col,
                    cell.col_span.unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_bars_copy_their_start_cell() {
        let event = CalendarEvent::range(
            make_date(2019, SEPTEMBER, 2),
            make_date(2019, SEPTEMBER, 4),
        )
        .recurring()
        .with_renderer("stripe");

        let cells = place(std::slice::from_ref(&event), SEPTEMBER);

        assert_eq!(
            cells[0],
            Cell {
                value: "2".to_string(),
                row: 1,
                col: 0,
                col_span: Some(3),
                is_current_month: true,
                is_event: true,
                with_event: false,
                event: Some(event.clone()),
            }
        );
    }

    #[test]
    fn test_recurrent_mon_wed_september() {
        let events = [CalendarEvent::range(
            make_date(2019, SEPTEMBER, 2),
            make_date(2019, SEPTEMBER, 4),
        )
        .recurring()];

        assert_eq!(
            layout(&place(&events, SEPTEMBER)),
            [
                ("2", 1, 0, 3),
                ("9", 2, 0, 3),
                ("16", 3, 0, 3),
                ("23", 4, 0, 3),
                ("30", 5, 0, 1),
            ]
        );
    }

    #[test]
    fn test_recurrent_mon_fri_september() {
        let events = [CalendarEvent::range(
            make_date(2019, SEPTEMBER, 2),
            make_date(2019, SEPTEMBER, 6),
        )
        .recurring()];

        assert_eq!(
            layout(&place(&events, SEPTEMBER)),
            [
                ("2", 1, 0, 5),
                ("9", 2, 0, 5),
                ("16", 3, 0, 5),
                ("23", 4, 0, 5),
                ("30", 5, 0, 1),
            ]
        );
    }

    #[test]
    fn test_recurrent_mon_sun_september() {
        let events = [CalendarEvent::range(
            make_date(2019, SEPTEMBER, 2),
            make_date(2019, SEPTEMBER, 8),
        )
        .recurring()];

        assert_eq!(
            layout(&place(&events, SEPTEMBER)),
            [
                ("1", 0, 6, 1),
                ("2", 1, 0, 7),
                ("9", 2, 0, 7),
                ("16", 3, 0, 7),
                ("23", 4, 0, 7),
                ("30", 5, 0, 1),
            ]
        );
    }

    #[test]
    fn test_recurrent_sundays_september() {
        let events = [CalendarEvent::single(make_date(2019, SEPTEMBER, 1)).recurring()];

        assert_eq!(
            layout(&place(&events, SEPTEMBER)),
            [
                ("1", 0, 6, 1),
                ("8", 1, 6, 1),
                ("15", 2, 6, 1),
                ("22", 3, 6, 1),
                ("29", 4, 6, 1),
            ]
        );
    }

    #[test]
    fn test_recurrent_saturdays_september() {
        let events = [CalendarEvent::single(make_date(2019, SEPTEMBER, 7)).recurring()];

        assert_eq!(
            layout(&place(&events, SEPTEMBER)),
            [
                ("7", 1, 5, 1),
                ("14", 2, 5, 1),
                ("21", 3, 5, 1),
                ("28", 4, 5, 1),
            ]
        );
    }

    #[test]
    fn test_recurrent_ignores_stored_month() {
        // A Saturday from another year lands on September's Saturdays.
        let events = [CalendarEvent::single(make_date(2016, JANUARY, 2)).recurring()];

        assert_eq!(
            layout(&place(&events, SEPTEMBER)),
            [
                ("7", 1, 5, 1),
                ("14", 2, 5, 1),
                ("21", 3, 5, 1),
                ("28", 4, 5, 1),
            ]
        );
    }

    #[test]
    fn test_recurrent_wed_thu_and_saturday_sorted_by_column() {
        let events = [
            CalendarEvent::single(make_date(2019, SEPTEMBER, 7)).recurring(),
            CalendarEvent::range(
                make_date(2019, SEPTEMBER, 4),
                make_date(2019, SEPTEMBER, 5),
            )
            .recurring(),
        ];

        assert_eq!(
            layout(&place(&events, SEPTEMBER)),
            [
                ("4", 1, 2, 2),
                ("7", 1, 5, 1),
                ("11", 2, 2, 2),
                ("14", 2, 5, 1),
                ("18", 3, 2, 2),
                ("21", 3, 5, 1),
                ("25", 4, 2, 2),
                ("28", 4, 5, 1),
            ]
        );
    }

    #[test]
    fn test_recurrent_range_ending_before_start_is_single_column() {
        // Friday to Tuesday.
        let events = [CalendarEvent::range(
            make_date(2019, SEPTEMBER, 6),
            make_date(2019, SEPTEMBER, 10),
        )
        .recurring()];

        let cells = place(&events, SEPTEMBER);

        assert!(cells.iter().all(|cell| cell.col == 4 && cell.col_span == Some(1)));
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn test_not_recurrent_dates_and_ranges_in_date_order() {
        let events = [
            CalendarEvent::single(make_date(2019, SEPTEMBER, 7)),
            CalendarEvent::range(
                make_date(2019, SEPTEMBER, 4),
                make_date(2019, SEPTEMBER, 5),
            ),
            CalendarEvent::single(make_date(2019, SEPTEMBER, 14)),
            CalendarEvent::range(
                make_date(2019, SEPTEMBER, 11),
                make_date(2019, SEPTEMBER, 12),
            ),
        ];

        assert_eq!(
            layout(&place(&events, SEPTEMBER)),
            [
                ("4", 1, 2, 2),
                ("7", 1, 5, 1),
                ("11", 2, 2, 2),
                ("14", 2, 5, 1),
            ]
        );
    }

    #[test]
    fn test_not_recurrent_range_mon_sun_september() {
        let events = [CalendarEvent::range(
            make_date(2019, SEPTEMBER, 2),
            make_date(2019, SEPTEMBER, 8),
        )];

        assert_eq!(layout(&place(&events, SEPTEMBER)), [("2", 1, 0, 7)]);
    }

    #[test]
    fn test_not_recurrent_full_february() {
        let events = [CalendarEvent::range(
            make_date(2019, FEBRUARY, 1),
            make_date(2019, FEBRUARY, 28),
        )];

        assert_eq!(
            layout(&place(&events, FEBRUARY)),
            [
                ("1", 0, 4, 3),
                ("4", 1, 0, 7),
                ("11", 2, 0, 7),
                ("18", 3, 0, 7),
                ("25", 4, 0, 4),
            ]
        );
    }

    #[test]
    fn test_not_recurrent_full_september() {
        let events = [CalendarEvent::range(
            make_date(2019, SEPTEMBER, 1),
            make_date(2019, SEPTEMBER, 30),
        )];

        assert_eq!(
            layout(&place(&events, SEPTEMBER)),
            [
                ("1", 0, 6, 1),
                ("2", 1, 0, 7),
                ("9", 2, 0, 7),
                ("16", 3, 0, 7),
                ("23", 4, 0, 7),
                ("30", 5, 0, 1),
            ]
        );
    }

    #[test]
    fn test_not_recurrent_full_april() {
        let events = [CalendarEvent::range(
            make_date(2019, APRIL, 1),
            make_date(2019, APRIL, 30),
        )];

        assert_eq!(
            layout(&place(&events, APRIL)),
            [
                ("1", 0, 0, 7),
                ("8", 1, 0, 7),
                ("15", 2, 0, 7),
                ("22", 3, 0, 7),
                ("29", 4, 0, 2),
            ]
        );
    }

    #[test]
    fn test_not_recurrent_each_day_april() {
        let events: Vec<CalendarEvent> = (1..=30)
            .map(|day| CalendarEvent::single(make_date(2019, APRIL, day)))
            .collect();

        let cells = place(&events, APRIL);

        assert_eq!(cells.len(), 30);
        for (index, cell) in cells.iter().enumerate() {
            assert_eq!(cell.value, (index + 1).to_string());
            assert_eq!((cell.row, cell.col), (index / 7, index % 7));
            assert_eq!(cell.col_span, Some(1));
        }
    }

    #[test]
    fn test_not_recurrent_january_february() {
        let events = [CalendarEvent::range(
            make_date(2019, JANUARY, 25),
            make_date(2019, FEBRUARY, 10),
        )];

        assert_eq!(
            layout(&place(&events, JANUARY)),
            [("25", 3, 4, 3), ("28", 4, 0, 4)]
        );
        assert_eq!(
            layout(&place(&events, FEBRUARY)),
            [("1", 0, 4, 3), ("4", 1, 0, 7)]
        );
    }

    #[test]
    fn test_not_recurrent_july_august() {
        let events = [CalendarEvent::range(
            make_date(2019, JULY, 14),
            make_date(2019, AUGUST, 9),
        )];

        assert_eq!(
            layout(&place(&events, JULY)),
            [
                ("14", 1, 6, 1),
                ("15", 2, 0, 7),
                ("22", 3, 0, 7),
                ("29", 4, 0, 3),
            ]
        );
        assert_eq!(
            layout(&place(&events, AUGUST)),
            [("1", 0, 3, 4), ("5", 1, 0, 5)]
        );
    }

    #[test]
    fn test_not_recurrent_june_july() {
        let events = [CalendarEvent::range(
            make_date(2019, JUNE, 24),
            make_date(2019, JULY, 24),
        )];

        assert_eq!(layout(&place(&events, JUNE)), [("24", 4, 0, 7)]);
        assert_eq!(
            layout(&place(&events, JULY)),
            [
                ("1", 0, 0, 7),
                ("8", 1, 0, 7),
                ("15", 2, 0, 7),
                ("22", 3, 0, 3),
            ]
        );
    }

    #[test]
    fn test_recurrent_bars_precede_dated_bars() {
        let events = [
            CalendarEvent::single(make_date(2019, SEPTEMBER, 3)),
            CalendarEvent::single(make_date(2019, SEPTEMBER, 1)).recurring(),
        ];

        let cells = place(&events, SEPTEMBER);

        assert_eq!(cells.len(), 6);
        assert!(cells[..5].iter().all(|cell| cell.event.as_ref().unwrap().is_recurrent));
        assert_eq!(cells[5].value, "3");
    }

    #[test]
    fn test_bars_ignore_normalized_flags() {
        let month = YearMonth::new(2019, SEPTEMBER);
        let events = [CalendarEvent::single(make_date(2019, SEPTEMBER, 3))];
        let refs: Vec<&CalendarEvent> = events.iter().collect();
        let normalized = normalize_events(&refs, month);
        let grid = generate_month_grid(30, 0, 31, &normalized);

        let cells = place_events(&refs, &grid, month).unwrap();

        assert!(grid.rows()[1][1].with_event);
        assert!(!cells[0].with_event);
        assert!(cells[0].is_event);
    }

    #[test]
    fn test_reversed_range_in_month_is_rejected() {
        let start = make_date(2019, SEPTEMBER, 20);
        let end = make_date(2019, SEPTEMBER, 3);
        let month = YearMonth::new(2019, SEPTEMBER);
        let events = [CalendarEvent::range(start, end)];
        let refs: Vec<&CalendarEvent> = events.iter().collect();

        assert_eq!(
            place_events(&refs, &month_grid(month), month),
            Err(GridError::InvalidRange { start, end })
        );
    }
}
