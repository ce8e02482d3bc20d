//! monthgrid_core - month grid layout and event placement.
//!
//! Lays out a Monday-first month grid and the event bars drawn over it. The
//! computation is pure: every call builds its cells from scratch.

pub mod calendar;
pub mod serde;

pub use calendar::{compute_month_cells, CalendarEvent, Cell, GridError, MonthGridBuilder};
