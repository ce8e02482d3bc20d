//! monthgrid_cli - command line surface for the month grid layout.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

pub use config::Config;
pub use error::{CliError, Result};
