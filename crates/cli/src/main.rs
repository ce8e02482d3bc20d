//! monthgrid CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use monthgrid_cli::cli::{Cli, Commands, MonthArgs};
use monthgrid_cli::input::load_events;
use monthgrid_cli::output::{render_month, render_triple, Layout};
use monthgrid_cli::{logging, Config};
use monthgrid_core::calendar::YearMonth;
use monthgrid_core::{CalendarEvent, MonthGridBuilder};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let args = cli.command.args();
    let (events, layout) = prepare(args)?;
    let builder = MonthGridBuilder::new(&events);
    let date = args.date_or_today();

    let output = match &cli.command {
        Commands::Month(_) => {
            let month = YearMonth::of(date);
            let cells = builder.build(month)?;
            render_month(&cells, month, cli.format, &layout)?
        }
        Commands::Triple(_) => {
            let triple = builder.build_triple(date)?;
            render_triple(&triple, date, cli.format, &layout)?
        }
    };

    println!("{output}");
    Ok(())
}

fn prepare(args: &MonthArgs) -> Result<(Vec<CalendarEvent>, Layout)> {
    let config = Config::from_env().with_view_width(args.width)?;
    tracing::debug!(?config, "Loaded configuration");

    let events = match &args.events {
        Some(path) => load_events(path)
            .with_context(|| format!("Failed to load events from {}", path.display()))?,
        None => Vec::new(),
    };

    Ok((events, Layout::new(&config)))
}
