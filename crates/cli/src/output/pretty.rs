//! Pretty output formatting.

use monthgrid_core::calendar::{YearMonth, WEEK_LEN};
use monthgrid_core::Cell;

use crate::config::Config;

/// Text layout of a month view.
#[derive(Debug, Clone)]
pub struct Layout {
    day_names: Vec<String>,
    cell_width: usize,
}

impl Layout {
    pub fn new(config: &Config) -> Self {
        Self {
            day_names: config.day_names.clone(),
            cell_width: config.cell_width(),
        }
    }

    /// Format a month: title, day names, then each week followed by one line
    /// per bar starting on it.
    pub fn format_month(&self, cells: &[Cell], month: YearMonth) -> String {
        let (bars, days): (Vec<&Cell>, Vec<&Cell>) = cells.iter().partition(|cell| cell.is_event);
        let width = self.cell_width * WEEK_LEN;
        let title = month.first_day().format("%B %Y").to_string();

        let mut lines = vec![
            format!("{title:^width$}").trim_end().to_string(),
            self.format_header(),
        ];
        for week in days.chunks(WEEK_LEN) {
            let line: String = week.iter().map(|cell| self.format_day(cell)).collect();
            lines.push(line.trim_end().to_string());

            let row = week[0].row;
            lines.extend(
                bars.iter()
                    .filter(|bar| bar.row == row)
                    .map(|bar| self.format_bar(bar)),
            );
        }
        lines.join("\n")
    }

    fn format_header(&self) -> String {
        let n = self.cell_width - 1;
        let header: String = self
            .day_names
            .iter()
            .map(|name| {
                let name: String = name.chars().take(n).collect();
                format!("{name:>n$} ")
            })
            .collect();
        header.trim_end().to_string()
    }

    /// Day number followed by a marker: `*` when an event touches the day,
    /// `.` for days of an adjacent month.
    fn format_day(&self, cell: &Cell) -> String {
        let marker = if !cell.is_current_month {
            '.'
        } else if cell.with_event {
            '*'
        } else {
            ' '
        };
        format!("{:>n$}{marker}", cell.value, n = self.cell_width - 1)
    }

    fn format_bar(&self, bar: &Cell) -> String {
        let inner = bar.col_span.unwrap_or(1) * self.cell_width - 2;
        let label: String = bar_label(bar).chars().take(inner).collect();
        let fill = inner - label.chars().count();
        let left = fill / 2;

        format!(
            "{}[{}{}{}]",
            " ".repeat(bar.col * self.cell_width),
            "=".repeat(left),
            label,
            "=".repeat(fill - left)
        )
    }
}

/// Label of a bar: the event title, else its renderer key.
fn bar_label(bar: &Cell) -> &str {
    bar.event
        .as_ref()
        .and_then(|event| event.title.as_deref().or(event.renderer.as_deref()))
        .unwrap_or("event")
}
