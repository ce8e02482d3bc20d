//! Output formatting functions.

pub mod json;
pub mod pretty;

use chrono::NaiveDate;
use monthgrid_core::calendar::{minus_month, plus_month, MonthTriple, YearMonth};
use monthgrid_core::Cell;

use crate::cli::OutputFormat;
use crate::error::Result;

pub use pretty::Layout;

/// Format the cells of one month.
pub fn render_month(
    cells: &[Cell],
    month: YearMonth,
    format: OutputFormat,
    layout: &Layout,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(&cells),
        OutputFormat::Pretty => Ok(layout.format_month(cells, month)),
    }
}

/// Format the three months around `date`.
pub fn render_triple(
    triple: &MonthTriple,
    date: NaiveDate,
    format: OutputFormat,
    layout: &Layout,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(triple),
        OutputFormat::Pretty => {
            let months = [
                (&triple.prev, YearMonth::of(minus_month(date))),
                (&triple.current, YearMonth::of(date)),
                (&triple.next, YearMonth::of(plus_month(date))),
            ];
            Ok(months
                .iter()
                .map(|(cells, month)| layout.format_month(cells, *month))
                .collect::<Vec<_>>()
                .join("\n\n"))
        }
    }
}
