//! The month grid data model.

use kalends_calendar::CalendarDate;
use serde::Serialize;

/// One day of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// The day shown in this cell.
    pub date: CalendarDate,
    /// `false` for leading and trailing days from adjacent months.
    pub in_month: bool,
    /// `true` for the clock's current date.
    pub is_today: bool,
    /// `true` on Saturday and Sunday.
    pub is_weekend: bool,
    /// `true` when a holiday falls on this day.
    pub is_holiday: bool,
    /// The holiday name, when `is_holiday` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
}

/// Seven consecutive cells, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Week {
    /// The seven days, Monday first.
    pub cells: [DayCell; 7],
}

impl Week {
    /// Returns the Monday of this week.
    pub fn monday(&self) -> CalendarDate {
        self.cells[0].date
    }
}

/// A month laid out as whole Monday-to-Sunday weeks.
///
/// Weeks are contiguous and cover every day of the month; cells outside the
/// month are present with `in_month == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    year: i32,
    month: u32,
    weeks: Vec<Week>,
}

impl CalendarGrid {
    pub(crate) fn new(year: i32, month: u32, weeks: Vec<Week>) -> Self {
        Self { year, month, weeks }
    }

    /// Returns the displayed year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the displayed month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the weeks in order.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Iterates over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.cells.iter())
    }

    /// Returns the cell showing `date`, if the grid contains it.
    pub fn cell(&self, date: CalendarDate) -> Option<&DayCell> {
        let date = date.date_only();
        self.cells().find(|cell| cell.date == date)
    }
}
