use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kalends_calendar::{CalendarDate, DateRange, Weekday};
use kalends_recurrence::Frequency;

/// Kalends calendar and scheduling toolkit.
#[derive(Parser)]
#[command(
    name = "kalends",
    version,
    about = "Holidays, business days, recurrences and month grids"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./kalends.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a month grid.
    Grid(GridArgs),
    /// List the holidays of a year.
    Holidays(HolidaysArgs),
    /// Business-day queries.
    Business(BusinessArgs),
    /// Expand a recurrence into dates.
    Recur(RecurArgs),
    /// Date range operations.
    Range(RangeArgs),
}

/// Arguments for the `grid` subcommand.
#[derive(clap::Args)]
pub struct GridArgs {
    /// Year to show (defaults to the current year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Month to show, 1-12 (defaults to the current month).
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Date to highlight as today (defaults to the system date).
    #[arg(long)]
    pub today: Option<CalendarDate>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Year to list (defaults to the current year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `business` subcommand.
#[derive(clap::Args)]
pub struct BusinessArgs {
    #[command(subcommand)]
    pub action: BusinessAction,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
}

/// Business-day queries.
#[derive(Subcommand)]
pub enum BusinessAction {
    /// Classify a date.
    Check {
        /// Date to classify (YYYY-MM-DD).
        date: CalendarDate,
    },
    /// Move a number of business days from a date.
    Add {
        /// Starting date (YYYY-MM-DD).
        date: CalendarDate,
        /// Business days to move; negative moves backward.
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    /// Count business days in an inclusive interval.
    Count {
        /// First date (YYYY-MM-DD).
        start: CalendarDate,
        /// Last date (YYYY-MM-DD).
        end: CalendarDate,
    },
}

/// Arguments for the `recur` subcommand.
#[derive(clap::Args)]
pub struct RecurArgs {
    /// First date considered (YYYY-MM-DD or YYYY-MM-DDTHH:MM).
    #[arg(short, long)]
    pub start: CalendarDate,

    /// Stepping unit: daily, weekly, monthly or yearly.
    #[arg(short, long)]
    pub frequency: Frequency,

    /// Units per step.
    #[arg(short, long, default_value_t = 1)]
    pub interval: u32,

    /// Allowed weekdays (repeatable or comma-separated, e.g. tue,thu).
    #[arg(long = "weekday", value_delimiter = ',')]
    pub weekdays: Vec<Weekday>,

    /// Allowed months, 1-12.
    #[arg(long = "month", value_delimiter = ',')]
    pub months: Vec<u32>,

    /// Allowed days of month, 1-31.
    #[arg(long = "day", value_delimiter = ',')]
    pub days: Vec<u32>,

    /// Inclusive last date.
    #[arg(short, long)]
    pub until: Option<CalendarDate>,

    /// Only report occurrences inside START..END.
    #[arg(long)]
    pub within: Option<DateRange>,

    /// Maximum number of occurrences (overrides [recurrence].default_limit).
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    #[command(subcommand)]
    pub action: RangeAction,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
}

/// Date range operations. Ranges are written START..END.
#[derive(Subcommand)]
pub enum RangeAction {
    /// Report overlap, adjacency and merge of two ranges.
    Compare {
        /// First range.
        a: DateRange,
        /// Second range.
        b: DateRange,
    },
    /// Split a range at a date.
    Split {
        /// Range to split.
        range: DateRange,
        /// Date that starts the second part.
        date: CalendarDate,
    },
    /// Merge ranges into sorted, disjoint, non-adjacent ranges.
    Coalesce {
        /// Ranges to merge.
        #[arg(required = true)]
        ranges: Vec<DateRange>,
    },
}
