//! Gregorian calendar date with an optional time of day.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::clock::{Clock, SystemClock};
use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// A year is a leap year when it is divisible by 4, except for century years,
/// which must also be divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`, or `None` if `month` is
/// outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        2 if is_leap_year(year) => Some(29),
        1..=12 => Some(DAYS_PER_MONTH[month as usize]),
        _ => None,
    }
}

/// An immutable proleptic Gregorian date, optionally carrying a time of day.
///
/// Values are always valid dates: there is no way to construct February 30
/// or February 29 of a common year. All arithmetic returns a new value and
/// preserves the time of day.
///
/// Ordering is chronological. A value without a time of day sorts before the
/// same date with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    date: NaiveDate,
    time: Option<NaiveTime>,
}

impl CalendarDate {
    /// Creates a date from year, month (1..=12) and day (1..=31).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the triple does not name a
    /// real Gregorian date (month out of range, day past the end of the
    /// month, or February 29 in a common year).
    pub fn from_parts(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_naive)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Wraps an already-valid [`NaiveDate`].
    pub fn from_naive(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    /// Returns today's date according to the local wall clock.
    pub fn today() -> Self {
        SystemClock.today()
    }

    /// Returns today's date according to `clock`.
    pub fn today_from<C: Clock + ?Sized>(clock: &C) -> Self {
        clock.today()
    }

    /// Returns a copy of this date carrying the given time of day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if the hour, minute or second is
    /// out of range.
    pub fn with_time(self, hour: u32, minute: u32, second: u32) -> Result<Self, CalendarError> {
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(
            CalendarError::InvalidTime {
                hour,
                minute,
                second,
            },
        )?;
        Ok(Self {
            date: self.date,
            time: Some(time),
        })
    }

    /// Returns a copy of this date with the time of day removed.
    pub fn date_only(self) -> Self {
        Self::from_naive(self.date)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.date.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.date.day()
    }

    /// Returns the time of day, if any.
    pub fn time(self) -> Option<NaiveTime> {
        self.time
    }

    /// Returns the underlying chrono date.
    pub fn naive_date(self) -> NaiveDate {
        self.date
    }

    /// Returns the ISO day of week, 1 (Monday) through 7 (Sunday).
    pub fn day_of_week(self) -> u32 {
        self.date.weekday().number_from_monday()
    }

    /// Returns the day of week.
    pub fn weekday(self) -> Weekday {
        self.date.weekday()
    }

    /// Returns `true` on Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        self.day_of_week() >= 6
    }

    /// Returns the date `n` days later (earlier for negative `n`), or `None`
    /// if the result leaves the representable range.
    pub fn checked_add_days(self, n: i64) -> Option<Self> {
        let date = if n >= 0 {
            self.date.checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.date.checked_sub_days(Days::new(n.unsigned_abs()))
        }?;
        Some(Self { date, ..self })
    }

    /// Returns the date `n` months later (earlier for negative `n`), clamping
    /// the day to the length of the target month, or `None` if the result
    /// leaves the representable range.
    pub fn checked_add_months(self, n: i32) -> Option<Self> {
        let date = if n >= 0 {
            self.date.checked_add_months(Months::new(n.unsigned_abs()))
        } else {
            self.date.checked_sub_months(Months::new(n.unsigned_abs()))
        }?;
        Some(Self { date, ..self })
    }

    /// Returns the date `n` days later (earlier for negative `n`).
    ///
    /// # Panics
    ///
    /// Panics if the result is outside the range chrono can represent
    /// (roughly ±262,000 years). Use [`checked_add_days`](Self::checked_add_days)
    /// to handle that case.
    pub fn add_days(self, n: i64) -> Self {
        self.checked_add_days(n)
            .unwrap_or_else(|| panic!("{self} + {n} days is out of range"))
    }

    /// Returns the date `n` months later, clamping the day to the target
    /// month's length: January 31 plus one month is the last day of February.
    ///
    /// # Panics
    ///
    /// Panics if the result is outside the range chrono can represent.
    pub fn add_months(self, n: i32) -> Self {
        self.checked_add_months(n)
            .unwrap_or_else(|| panic!("{self} + {n} months is out of range"))
    }

    /// Returns the date `n` years later, clamping February 29 to February 28
    /// when the target year is a common year.
    ///
    /// # Panics
    ///
    /// Panics if the result is outside the range chrono can represent.
    pub fn add_years(self, n: i32) -> Self {
        self.checked_add_months(n.saturating_mul(12))
            .unwrap_or_else(|| panic!("{self} + {n} years is out of range"))
    }

    /// Returns the first day of this date's month (time of day removed).
    pub fn first_of_month(self) -> Self {
        self.date_only().add_days(-i64::from(self.day() - 1))
    }

    /// Returns the last day of this date's month (time of day removed).
    pub fn last_of_month(self) -> Self {
        let last = days_in_month(self.year(), self.month()).unwrap_or(self.day());
        self.date_only().add_days(i64::from(last - self.day()))
    }

    /// Returns the signed number of whole days from `self` to `other`,
    /// ignoring any time of day.
    pub fn days_until(self, other: Self) -> i64 {
        other.date.signed_duration_since(self.date).num_days()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))?;
        if let Some(time) = self.time {
            write!(
                f,
                "T{:02}:{:02}:{:02}",
                time.hour(),
                time.minute(),
                time.second()
            )?;
        }
        Ok(())
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let parse_err = |e: chrono::ParseError| CalendarError::Parse {
            input: s.to_string(),
            reason: e.to_string(),
        };

        if input.contains('T') {
            let dt = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
                .map_err(parse_err)?;
            return Ok(Self {
                date: dt.date(),
                time: Some(dt.time()),
            });
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Self::from_naive)
            .map_err(parse_err)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
