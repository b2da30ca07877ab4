//! Business command: classify dates, step and count business days.

use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info_span};

use kalends_calendar::CalendarDate;
use kalends_holiday::{BusinessDayClassifier, DayKind, HolidayIndex};

use crate::cli::{BusinessAction, BusinessArgs};
use crate::config::KalendsConfig;
use crate::convert;

/// Lower bound on business days in a year for any realistic holiday set; an
/// offset of `n` business days spans at most `n / 200 + 1` years.
const MIN_BUSINESS_DAYS_PER_YEAR: u64 = 200;

#[derive(Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum BusinessReport<'a> {
    Check {
        date: CalendarDate,
        kind: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        holiday: Option<&'a str>,
    },
    Add {
        start: CalendarDate,
        days: i64,
        result: CalendarDate,
    },
    Count {
        start: CalendarDate,
        end: CalendarDate,
        business_days: u64,
    },
}

/// Run a business-day query against the configured holidays.
pub fn run(args: BusinessArgs, config: &KalendsConfig) -> Result<()> {
    let _cmd = info_span!("business").entered();

    let years = match args.action {
        BusinessAction::Check { date } => date.year()..=date.year(),
        BusinessAction::Add { date, days } => {
            let margin = i32::try_from(days.unsigned_abs() / MIN_BUSINESS_DAYS_PER_YEAR + 1)
                .context("business day offset is too large")?;
            date.year().saturating_sub(margin)..=date.year().saturating_add(margin)
        }
        BusinessAction::Count { start, end } => start.year()..=end.year(),
    };
    let holidays = build_index(config, years)?;
    let business = BusinessDayClassifier::new(&holidays);

    let report = match args.action {
        BusinessAction::Check { date } => {
            let (kind, holiday) = match business.classify(date) {
                DayKind::Business => ("business", None),
                DayKind::Weekend => ("weekend", None),
                DayKind::Holiday(name) => ("holiday", Some(name)),
            };
            BusinessReport::Check {
                date,
                kind,
                holiday,
            }
        }
        BusinessAction::Add { date, days } => BusinessReport::Add {
            start: date,
            days,
            result: business.add_business_days(date, days),
        },
        BusinessAction::Count { start, end } => BusinessReport::Count {
            start,
            end,
            business_days: business
                .count_business_days(start, end)
                .context("failed to count business days")?,
        },
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialise report")?;
        println!("{json}");
        return Ok(());
    }
    match report {
        BusinessReport::Check {
            date,
            kind,
            holiday: Some(name),
        } => println!("{date} ({}): {kind}, {name}", date.weekday()),
        BusinessReport::Check { date, kind, .. } => println!("{date} ({}): {kind}", date.weekday()),
        BusinessReport::Add { result, .. } => println!("{result}"),
        BusinessReport::Count { business_days, .. } => println!("{business_days}"),
    }
    Ok(())
}

fn build_index(config: &KalendsConfig, years: RangeInclusive<i32>) -> Result<HolidayIndex> {
    let calculator = convert::build_calculator(&config.holidays)?;
    let custom = convert::build_custom(&config.holidays)?;
    debug!(first = years.start(), last = years.end(), "indexing holidays");
    HolidayIndex::build(&calculator, years, &custom).context("failed to compute holidays")
}
