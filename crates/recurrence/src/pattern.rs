//! Recurrence patterns and their validating builder.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use kalends_calendar::{CalendarDate, DateRange, Weekday};

use crate::error::RecurrenceError;
use crate::occurrences::Occurrences;

/// The stepping unit of a recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Every `interval` days.
    Daily,
    /// Every `interval` weeks.
    Weekly,
    /// Every `interval` months.
    Monthly,
    /// Every `interval` years.
    Yearly,
}

impl Frequency {
    /// Number of consecutive periods after which the Gregorian calendar
    /// repeats itself exactly (400 years, including weekdays).
    pub(crate) fn cycle_periods(self) -> u64 {
        match self {
            Self::Daily => 146_097,
            Self::Weekly => 20_871,
            Self::Monthly => 4_800,
            Self::Yearly => 400,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        };
        f.write_str(name)
    }
}

impl FromStr for Frequency {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" | "annually" => Ok(Self::Yearly),
            _ => Err(RecurrenceError::UnknownFrequency {
                name: s.to_string(),
            }),
        }
    }
}

/// A validated recurrence: start, optional end, stepping and filters.
///
/// Patterns are immutable. Occurrence generation is a pure function of the
/// pattern and the requested limit; each call to
/// [`occurrences`](Self::occurrences) starts over from `start`.
///
/// # Example
///
/// ```
/// use kalends_calendar::{CalendarDate, Weekday};
/// use kalends_recurrence::{Frequency, RecurrencePattern};
///
/// let start = CalendarDate::from_parts(2024, 3, 5).unwrap();
/// let pattern = RecurrencePattern::builder(start, Frequency::Weekly)
///     .with_weekdays([Weekday::Tue, Weekday::Thu])
///     .build()
///     .unwrap();
/// let dates: Vec<String> = pattern.occurrences(4).map(|d| d.to_string()).collect();
/// assert_eq!(dates, ["2024-03-05", "2024-03-07", "2024-03-12", "2024-03-14"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrencePattern {
    start: CalendarDate,
    until: Option<CalendarDate>,
    frequency: Frequency,
    interval: u32,
    weekdays: Vec<Weekday>,
    months: BTreeSet<u32>,
    days_of_month: BTreeSet<u32>,
}

impl RecurrencePattern {
    /// Starts building a pattern with interval 1 and no filters.
    pub fn builder(start: CalendarDate, frequency: Frequency) -> RecurrenceBuilder {
        RecurrenceBuilder {
            start,
            until: None,
            frequency,
            interval: 1,
            weekdays: Vec::new(),
            months: BTreeSet::new(),
            days_of_month: BTreeSet::new(),
        }
    }

    /// Returns the first date considered.
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the inclusive end bound, if any.
    pub fn until(&self) -> Option<CalendarDate> {
        self.until
    }

    /// Returns the stepping unit.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the number of units per step (at least 1).
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Returns the allowed weekdays, Monday first. Empty means any.
    pub fn weekdays(&self) -> &[Weekday] {
        &self.weekdays
    }

    /// Returns the allowed months. Empty means any.
    pub fn months(&self) -> &BTreeSet<u32> {
        &self.months
    }

    /// Returns the allowed days of month. Empty means any.
    pub fn days_of_month(&self) -> &BTreeSet<u32> {
        &self.days_of_month
    }

    /// Returns `true` if `date` passes every configured filter.
    pub fn matches(&self, date: CalendarDate) -> bool {
        (self.weekdays.is_empty() || self.weekdays.contains(&date.weekday()))
            && (self.months.is_empty() || self.months.contains(&date.month()))
            && (self.days_of_month.is_empty() || self.days_of_month.contains(&date.day()))
    }

    /// Returns up to `limit` occurrences in chronological order.
    ///
    /// The sequence is lazy and finite: it ends at `limit`, after `until`,
    /// or once a full 400-year calendar cycle has produced nothing.
    pub fn occurrences(&self, limit: usize) -> Occurrences<'_> {
        Occurrences::new(self, limit)
    }

    /// Returns up to `limit` occurrences that fall inside `range`.
    pub fn occurrences_in(
        &self,
        range: DateRange,
        limit: usize,
    ) -> impl Iterator<Item = CalendarDate> + '_ {
        self.occurrences(usize::MAX)
            .skip_while(move |d| d.date_only() < range.start())
            .take_while(move |d| range.contains(*d))
            .take(limit)
    }

    /// Returns `true` when a filter finer than the frequency is configured,
    /// so every day of a period is a candidate instead of only its anchor.
    pub(crate) fn expands_days(&self) -> bool {
        match self.frequency {
            Frequency::Daily => false,
            Frequency::Weekly => !self.weekdays.is_empty(),
            Frequency::Monthly | Frequency::Yearly => {
                !self.weekdays.is_empty() || !self.days_of_month.is_empty()
            }
        }
    }
}

/// Builder for [`RecurrencePattern`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct RecurrenceBuilder {
    start: CalendarDate,
    until: Option<CalendarDate>,
    frequency: Frequency,
    interval: u32,
    weekdays: Vec<Weekday>,
    months: BTreeSet<u32>,
    days_of_month: BTreeSet<u32>,
}

impl RecurrenceBuilder {
    /// Sets the number of units per step.
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the inclusive end bound (compared by day).
    pub fn with_until(mut self, until: CalendarDate) -> Self {
        self.until = Some(until);
        self
    }

    /// Restricts occurrences to these weekdays.
    pub fn with_weekdays(mut self, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        self.weekdays.extend(weekdays);
        self
    }

    /// Restricts occurrences to these months (1..=12).
    pub fn with_months(mut self, months: impl IntoIterator<Item = u32>) -> Self {
        self.months.extend(months);
        self
    }

    /// Restricts occurrences to these days of month (1..=31).
    pub fn with_days_of_month(mut self, days: impl IntoIterator<Item = u32>) -> Self {
        self.days_of_month.extend(days);
        self
    }

    /// Validates and freezes the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::InvalidInterval`] for a zero interval,
    /// [`RecurrenceError::InvalidMonth`] or
    /// [`RecurrenceError::InvalidDayOfMonth`] for out-of-range filter values.
    pub fn build(self) -> Result<RecurrencePattern, RecurrenceError> {
        if self.interval == 0 {
            return Err(RecurrenceError::InvalidInterval {
                interval: self.interval,
            });
        }
        if let Some(&month) = self.months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(RecurrenceError::InvalidMonth { month });
        }
        if let Some(&day) = self.days_of_month.iter().find(|d| !(1..=31).contains(*d)) {
            return Err(RecurrenceError::InvalidDayOfMonth { day });
        }

        let mut weekdays = self.weekdays;
        weekdays.sort_by_key(|w| w.num_days_from_monday());
        weekdays.dedup();

        Ok(RecurrencePattern {
            start: self.start,
            until: self.until,
            frequency: self.frequency,
            interval: self.interval,
            weekdays,
            months: self.months,
            days_of_month: self.days_of_month,
        })
    }
}
