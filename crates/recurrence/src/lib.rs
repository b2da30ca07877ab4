//! # kalends-recurrence
//!
//! Recurring-event generation: a start date, a stepping frequency and
//! optional weekday, month and day-of-month filters.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["RecurrenceBuilder"] -->|".build()"| B["RecurrencePattern"]
//!     B -->|".occurrences(limit)"| C["Occurrences"]
//!     B -->|".occurrences_in(range, limit)"| C
//!     C -->|"Iterator"| D["CalendarDate"]
//! ```
//!
//! Each step of the pattern covers one period (a day, a week, a month or a
//! year). When a filter finer than the period is configured, every day of
//! the period becomes a candidate; otherwise only the period's anchor date
//! is. Anchors are always computed from the start date, so monthly
//! recurrences starting on the 31st land on the last day of shorter months
//! without drifting.
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::CalendarDate;
//! use kalends_recurrence::{Frequency, RecurrencePattern};
//!
//! let start = CalendarDate::from_parts(2024, 1, 31).unwrap();
//! let monthly = RecurrencePattern::builder(start, Frequency::Monthly)
//!     .build()
//!     .unwrap();
//! let dates: Vec<String> = monthly.occurrences(3).map(|d| d.to_string()).collect();
//! assert_eq!(dates, ["2024-01-31", "2024-02-29", "2024-03-31"]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `pattern` | Frequency, pattern and validating builder |
//! | `occurrences` | Lazy occurrence iterator |
//! | `error` | Error types |

mod error;
mod occurrences;
mod pattern;

pub use error::RecurrenceError;
pub use occurrences::Occurrences;
pub use pattern::{Frequency, RecurrenceBuilder, RecurrencePattern};
