//! Error types for kalends-holiday.

use kalends_calendar::{CalendarDate, CalendarError, DateRange};

/// Error type for all fallible operations in the kalends-holiday crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HolidayError {
    /// Returned when a holiday rule is constructed with impossible parameters.
    #[error("invalid holiday rule {name:?}: {reason}")]
    InvalidRule {
        /// Name of the rejected rule.
        name: String,
        /// Why the rule was rejected.
        reason: String,
    },

    /// Returned when a rule has no matching date in the requested year, such
    /// as a fifth Monday in a month with only four.
    #[error("holiday rule {name:?} has no date in {year}")]
    RuleUnsatisfiable {
        /// Name of the rule.
        name: String,
        /// The year that was evaluated.
        year: i32,
    },

    /// Returned when a precomputed index is queried outside the span it covers.
    #[error("{date} is outside the indexed span {span}")]
    OutsideIndex {
        /// The date that was queried.
        date: CalendarDate,
        /// The span the index covers.
        span: DateRange,
    },

    /// Wraps an error from kalends-calendar (invalid dates or ranges).
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
