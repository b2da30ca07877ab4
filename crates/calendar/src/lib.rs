//! # kalends-calendar
//!
//! Proleptic Gregorian dates, wall-clock sources and inclusive date ranges.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(y, m, d)"] -->|"CalendarDate::from_parts()"| B["CalendarDate"]
//!     C["Clock"] -->|".today()"| B
//!     B -->|".add_days() / .add_months()"| B
//!     B -->|"date_sequence()"| D["Vec of CalendarDate"]
//!     B -->|"DateRange::new()"| E["DateRange"]
//!     E -->|".merge() / .split()"| E
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::{CalendarDate, DateRange};
//!
//! let start = CalendarDate::from_parts(2024, 1, 31).unwrap();
//! assert_eq!(start.add_months(1).to_string(), "2024-02-29");
//!
//! let a = DateRange::new(start, start.add_days(9)).unwrap();
//! let b = DateRange::new(start.add_days(10), start.add_days(19)).unwrap();
//! assert!(a.is_adjacent(&b));
//! assert_eq!(a.merge(&b).unwrap().len_days(), 20);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian date value type and arithmetic |
//! | `clock` | Sources of "today" |
//! | `range` | Inclusive date ranges |
//! | `sequence` | Consecutive date sequences |
//! | `error` | Error types |

mod clock;
mod date;
mod error;
mod range;
mod sequence;

pub use chrono::Weekday;
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{CalendarDate, days_in_month, is_leap_year};
pub use error::CalendarError;
pub use range::DateRange;
pub use sequence::date_sequence;
