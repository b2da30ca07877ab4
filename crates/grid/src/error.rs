//! Error types for kalends-grid.

use kalends_calendar::CalendarError;
use kalends_holiday::HolidayError;

/// Error type for all fallible operations in the kalends-grid crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Wraps an error from kalends-calendar, such as an invalid month.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Wraps an error from kalends-holiday raised while computing holidays.
    #[error(transparent)]
    Holiday(#[from] HolidayError),
}
