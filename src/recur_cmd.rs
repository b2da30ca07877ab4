//! Recur command: expand a recurrence into dates.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kalends_calendar::CalendarDate;
use kalends_recurrence::RecurrencePattern;

use crate::cli::RecurArgs;
use crate::config::KalendsConfig;

/// Build the pattern from the arguments and print its occurrences.
pub fn run(args: RecurArgs, config: &KalendsConfig) -> Result<()> {
    let _cmd = info_span!("recur").entered();

    let mut builder = RecurrencePattern::builder(args.start, args.frequency)
        .with_interval(args.interval)
        .with_weekdays(args.weekdays)
        .with_months(args.months)
        .with_days_of_month(args.days);
    if let Some(until) = args.until {
        builder = builder.with_until(until);
    }
    let pattern = builder.build().context("invalid recurrence")?;

    let limit = args.limit.unwrap_or(config.recurrence.default_limit);
    let dates: Vec<CalendarDate> = match args.within {
        Some(range) => pattern.occurrences_in(range, limit).collect(),
        None => pattern.occurrences(limit).collect(),
    };
    info!(
        frequency = %pattern.frequency(),
        limit,
        n_occurrences = dates.len(),
        "recurrence expanded"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&dates).context("failed to serialise dates")?;
        println!("{json}");
    } else {
        for date in &dates {
            println!("{date}");
        }
    }
    Ok(())
}
