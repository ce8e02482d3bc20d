//! Arguments shared by the month commands.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;

/// Which month to render and what to draw on it.
#[derive(Debug, Clone, Args)]
pub struct MonthArgs {
    /// Date whose month is rendered (YYYY-MM-DD, default: today).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// JSON file holding an array of event records.
    #[arg(long, env = "MONTHGRID_EVENTS")]
    pub events: Option<PathBuf>,

    /// Month view width in columns, overrides MONTHGRID_VIEW_WIDTH.
    #[arg(long)]
    pub width: Option<usize>,
}

impl MonthArgs {
    pub fn date_or_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}
