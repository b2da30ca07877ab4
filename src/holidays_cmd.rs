//! Holidays command: list the holidays of one year.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use kalends_calendar::CalendarDate;

use crate::cli::HolidaysArgs;
use crate::config::KalendsConfig;
use crate::convert;

#[derive(Serialize)]
struct HolidayEntry<'a> {
    date: CalendarDate,
    weekday: String,
    name: &'a str,
}

/// Compute and print the configured holidays of a year.
pub fn run(args: HolidaysArgs, config: &KalendsConfig) -> Result<()> {
    let _cmd = info_span!("holidays").entered();

    let year = args.year.unwrap_or_else(|| CalendarDate::today().year());
    let calculator = convert::build_calculator(&config.holidays)?;
    let custom = convert::build_custom(&config.holidays)?;

    let set = calculator
        .holidays_for_year(year, &custom)
        .with_context(|| format!("failed to compute holidays for {year}"))?;
    info!(year, n_holidays = set.len(), "holidays computed");

    let entries: Vec<HolidayEntry<'_>> = set
        .iter()
        .map(|(date, name)| HolidayEntry {
            date,
            weekday: date.weekday().to_string(),
            name,
        })
        .collect();

    if args.json {
        let json =
            serde_json::to_string_pretty(&entries).context("failed to serialise holidays")?;
        println!("{json}");
    } else {
        for entry in &entries {
            println!("{}  {}  {}", entry.date, entry.weekday, entry.name);
        }
    }
    Ok(())
}
