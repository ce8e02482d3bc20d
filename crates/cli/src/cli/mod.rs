//! CLI command definitions.

pub mod month;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

pub use month::MonthArgs;

/// Lay out month grids and the event bars drawn over them.
#[derive(Debug, Parser)]
#[command(name = "monthgrid")]
#[command(version, about = "Lay out month grids and event bars", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The cell list as JSON.
    Json,
    /// A text month view.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the month containing a date.
    Month(MonthArgs),
    /// Render the previous, current and next months around a date.
    Triple(MonthArgs),
}

impl Commands {
    pub fn args(&self) -> &MonthArgs {
        match self {
            Commands::Month(args) | Commands::Triple(args) => args,
        }
    }
}
