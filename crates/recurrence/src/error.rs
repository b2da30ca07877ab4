//! Error types for kalends-recurrence.

/// Error type for all fallible operations in the kalends-recurrence crate.
///
/// Every variant is a construction-time failure. An empty occurrence sequence
/// is a valid result, not an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecurrenceError {
    /// Returned when the stepping interval is zero.
    #[error("invalid interval: {interval} (must be at least 1)")]
    InvalidInterval {
        /// The rejected interval.
        interval: u32,
    },

    /// Returned when a month filter value is outside 1..=12.
    #[error("invalid month filter: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month.
        month: u32,
    },

    /// Returned when a day-of-month filter value is outside 1..=31.
    #[error("invalid day-of-month filter: {day} (must be 1..=31)")]
    InvalidDayOfMonth {
        /// The rejected day.
        day: u32,
    },

    /// Returned when a frequency name is not recognised.
    #[error("unknown frequency: {name:?} (expected daily, weekly, monthly or yearly)")]
    UnknownFrequency {
        /// The rejected name.
        name: String,
    },
}
