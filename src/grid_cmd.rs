//! Grid command: print a month as text or JSON.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kalends_calendar::{CalendarDate, FixedClock};
use kalends_grid::{MonthGridBuilder, render_text};

use crate::cli::GridArgs;
use crate::config::KalendsConfig;
use crate::convert;

/// Build and print one month grid.
pub fn run(args: GridArgs, config: &KalendsConfig) -> Result<()> {
    let _cmd = info_span!("grid").entered();

    let today = args.today.unwrap_or_else(CalendarDate::today);
    let year = args.year.unwrap_or(today.year());
    let month = args.month.unwrap_or(today.month());

    let calculator = convert::build_calculator(&config.holidays)?;
    let custom = convert::build_custom(&config.holidays)?;

    let grid = MonthGridBuilder::new(calculator)
        .with_custom_holidays(custom)
        .with_clock(FixedClock::new(today))
        .build(year, month)
        .with_context(|| format!("failed to build grid for {year}-{month:02}"))?;
    info!(year, month, n_weeks = grid.weeks().len(), "grid built");

    if args.json {
        let json = serde_json::to_string_pretty(&grid).context("failed to serialise grid")?;
        println!("{json}");
    } else {
        print!("{}", render_text(&grid));
    }
    Ok(())
}
