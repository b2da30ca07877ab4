//! # kalends-grid
//!
//! Month display grids: whole Monday-to-Sunday weeks whose cells carry
//! weekend, holiday and today flags.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["HolidayCalculator"] --> B["MonthGridBuilder"]
//!     C["Clock"] -->|".with_clock()"| B
//!     B -->|".build(year, month)"| D["CalendarGrid"]
//!     D -->|"render_text()"| E["String"]
//!     D -->|"serde"| F["JSON"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::{CalendarDate, FixedClock};
//! use kalends_grid::{MonthGridBuilder, render_text};
//! use kalends_holiday::HolidayCalculator;
//!
//! let today = CalendarDate::from_parts(2024, 3, 5).unwrap();
//! let grid = MonthGridBuilder::new(HolidayCalculator::us_federal())
//!     .with_clock(FixedClock::new(today))
//!     .build(2024, 3)
//!     .unwrap();
//!
//! // March 2024 starts on a Friday: the grid begins Monday, February 26.
//! assert_eq!(grid.weeks()[0].monday().to_string(), "2024-02-26");
//! assert!(render_text(&grid).contains("[ 5]"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `grid` | `CalendarGrid`, `Week` and `DayCell` |
//! | `builder` | `MonthGridBuilder` |
//! | `render` | `cal`-style text output |
//! | `error` | Error types |

mod builder;
mod error;
mod grid;
mod render;

pub use builder::MonthGridBuilder;
pub use error::GridError;
pub use grid::{CalendarGrid, DayCell, Week};
pub use render::render_text;
