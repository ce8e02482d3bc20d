use std::env;

use crate::error::{CliError, Result};

const DEFAULT_DAY_NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
const DEFAULT_VIEW_WIDTH: usize = 56;
const MIN_CELL_WIDTH: usize = 3;

/// Rendering configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Column header names, Monday first (default: mon..sun)
    pub day_names: Vec<String>,
    /// Month view width in columns (default: 56)
    pub view_width: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MONTHGRID_DAY_NAMES` - Comma separated, exactly seven names
    /// - `MONTHGRID_VIEW_WIDTH` - Month view width in columns (default: 56)
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("MONTHGRID_DAY_NAMES").ok().as_deref(),
            env::var("MONTHGRID_VIEW_WIDTH").ok().as_deref(),
        )
    }

    /// Builds a configuration from raw variable values, falling back to the
    /// defaults for anything missing or unusable.
    pub fn from_vars(day_names: Option<&str>, view_width: Option<&str>) -> Self {
        let day_names = day_names
            .and_then(|raw| {
                let names: Vec<String> =
                    raw.split(',').map(|name| name.trim().to_string()).collect();
                if names.len() == DEFAULT_DAY_NAMES.len() {
                    Some(names)
                } else {
                    tracing::warn!(
                        count = names.len(),
                        "Ignoring MONTHGRID_DAY_NAMES, expected 7 comma separated names"
                    );
                    None
                }
            })
            .unwrap_or_else(default_day_names);

        let view_width = view_width
            .and_then(|raw| match raw.trim().parse::<usize>() {
                Ok(width) if width > 0 => Some(width),
                _ => {
                    tracing::warn!(value = raw, "Ignoring invalid MONTHGRID_VIEW_WIDTH");
                    None
                }
            })
            .unwrap_or(DEFAULT_VIEW_WIDTH);

        Self {
            day_names,
            view_width,
        }
    }

    /// Applies a command line width override.
    pub fn with_view_width(mut self, width: Option<usize>) -> Result<Self> {
        match width {
            Some(0) => Err(CliError::InvalidInput(
                "--width must be at least 1".to_string(),
            )),
            Some(width) => {
                self.view_width = width;
                Ok(self)
            }
            None => Ok(self),
        }
    }

    /// Width of one day column, never narrower than three characters.
    pub fn cell_width(&self) -> usize {
        (self.view_width / DEFAULT_DAY_NAMES.len()).max(MIN_CELL_WIDTH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_day_names() -> Vec<String> {
    DEFAULT_DAY_NAMES.iter().map(|name| name.to_string()).collect()
}
