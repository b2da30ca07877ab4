//! Range command: compare, split and coalesce date ranges.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info_span};

use kalends_calendar::DateRange;

use crate::cli::{RangeAction, RangeArgs};

#[derive(Serialize)]
struct Comparison {
    a: DateRange,
    b: DateRange,
    overlaps: bool,
    overlap: Option<DateRange>,
    adjacent: bool,
    merged: Option<DateRange>,
}

/// Run a range operation and print the result.
pub fn run(args: RangeArgs) -> Result<()> {
    let _cmd = info_span!("range").entered();

    match args.action {
        RangeAction::Compare { a, b } => {
            let cmp = Comparison {
                a,
                b,
                overlaps: a.overlaps(&b),
                overlap: a.overlap(&b),
                adjacent: a.is_adjacent(&b),
                merged: a.merge(&b),
            };
            if args.json {
                print_json(&cmp)?;
            } else {
                println!("overlaps: {}", cmp.overlaps);
                println!("overlap:  {}", display_or_none(cmp.overlap));
                println!("adjacent: {}", cmp.adjacent);
                println!("merged:   {}", display_or_none(cmp.merged));
            }
        }
        RangeAction::Split { range, date } => {
            let parts = range.split(date);
            debug!(%range, %date, n_parts = parts.len(), "range split");
            print_ranges(&parts, args.json)?;
        }
        RangeAction::Coalesce { ranges } => {
            let n_in = ranges.len();
            let merged = DateRange::coalesce(ranges);
            debug!(n_in, n_out = merged.len(), "ranges coalesced");
            print_ranges(&merged, args.json)?;
        }
    }
    Ok(())
}

fn display_or_none(range: Option<DateRange>) -> String {
    range.map_or_else(|| "none".to_string(), |r| r.to_string())
}

fn print_ranges(ranges: &[DateRange], json: bool) -> Result<()> {
    if json {
        return print_json(&ranges);
    }
    for range in ranges {
        println!("{range}");
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    println!("{json}");
    Ok(())
}
