//! # kalends-holiday
//!
//! Fixed and rule-based holidays, and business-day arithmetic on top of them.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["HolidayRule"] -->|".date_in(year)"| B["CalendarDate"]
//!     C["HolidayCalculator"] -->|".holidays_for_year()"| D["HolidaySet"]
//!     C -->|"HolidayIndex::build()"| E["HolidayIndex"]
//!     D --> F["BusinessDayClassifier"]
//!     E --> F
//!     F -->|"BusinessDayIndex::build()"| G["BusinessDayIndex"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::CalendarDate;
//! use kalends_holiday::{BusinessDayClassifier, CustomHolidays, HolidayCalculator};
//!
//! let calc = HolidayCalculator::us_federal();
//! let holidays = calc.holidays_for_year(2024, &CustomHolidays::new()).unwrap();
//! let business = BusinessDayClassifier::new(&holidays);
//!
//! // Wednesday July 3 plus one business day skips Independence Day.
//! let wed = CalendarDate::from_parts(2024, 7, 3).unwrap();
//! assert_eq!(business.add_business_days(wed, 1).to_string(), "2024-07-05");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `rule` | Fixed, nth-weekday and Easter-relative rules |
//! | `easter` | Gregorian computus |
//! | `calculator` | Yearly holiday computation and presets |
//! | `set` | Per-year sets, lookups and the multi-year index |
//! | `business` | Business-day classification and counting |
//! | `error` | Error types |

mod business;
mod calculator;
mod easter;
mod error;
mod rule;
mod set;

pub use business::{BusinessDayClassifier, BusinessDayIndex, DayKind};
pub use calculator::HolidayCalculator;
pub use easter::easter_sunday;
pub use error::HolidayError;
pub use rule::{HolidayRule, RuleKind, WeekdayOrdinal};
pub use set::{CustomHolidays, HolidayIndex, HolidayLookup, HolidaySet, is_holiday};
