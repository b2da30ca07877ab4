//! Error types for the kalends-calendar crate.

use crate::date::CalendarDate;

/// Error type for all fallible operations in the kalends-calendar crate.
///
/// This enum covers construction failures for dates, times of day and date
/// ranges, plus parse failures for ISO 8601 input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a (year, month, day) triple is not a proleptic Gregorian date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u32,
        /// The day that was provided.
        day: u32,
    },

    /// Returned when an (hour, minute, second) triple is not a time of day.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// The hour that was provided.
        hour: u32,
        /// The minute that was provided.
        minute: u32,
        /// The second that was provided.
        second: u32,
    },

    /// Returned when a range would end before it starts.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested start of the range.
        start: CalendarDate,
        /// Requested end of the range.
        end: CalendarDate,
    },

    /// Returned when a string is not an ISO 8601 date or date-time.
    #[error("cannot parse {input:?} as a date: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
}
