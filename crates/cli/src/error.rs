//! CLI error types.

use monthgrid_core::GridError;
use thiserror::Error;

/// Result type alias for the CLI crate.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while rendering a month from the command line.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Grid layout failed: {0}")]
    Grid(#[from] GridError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
