mod arithmetic;
mod builder;
mod error;
mod grid;
mod normalize;
mod operations;
mod placement;
mod types;

pub use arithmetic::{
    column_weekday, date_column, days_in_month, first_weekday, minus_month, plus_month,
    previous_month, weekday_column, YearMonth,
};
pub use builder::{compute_month_cells, MonthGridBuilder, MonthTriple};
pub use error::{GridError, MalformedEvent};
pub use grid::{generate_month_grid, MonthGrid, MAX_ROWS, WEEK_LEN};
pub use normalize::normalize_events;
pub use operations::{events_from_records, filter_events, validate_event, validate_events};
pub use placement::place_events;
pub use types::{CalendarEvent, Cell, EventRecord, EventSpan, NormalizedEvents};
