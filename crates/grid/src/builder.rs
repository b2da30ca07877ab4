//! Month grid construction.

use kalends_calendar::{CalendarDate, CalendarError, Clock, SystemClock, date_sequence};
use kalends_holiday::{CustomHolidays, HolidayCalculator, HolidayIndex, HolidayLookup};
use tracing::debug;

use crate::error::GridError;
use crate::grid::{CalendarGrid, DayCell, Week};

/// Builds [`CalendarGrid`]s for display.
///
/// Holidays come from a [`HolidayCalculator`] plus optional custom entries.
/// "Today" comes from a [`Clock`], the system clock unless replaced with
/// [`with_clock`](Self::with_clock).
///
/// # Example
///
/// ```
/// use kalends_calendar::{CalendarDate, FixedClock};
/// use kalends_grid::MonthGridBuilder;
/// use kalends_holiday::HolidayCalculator;
///
/// let today = CalendarDate::from_parts(2024, 7, 4).unwrap();
/// let grid = MonthGridBuilder::new(HolidayCalculator::us_federal())
///     .with_clock(FixedClock::new(today))
///     .build(2024, 7)
///     .unwrap();
/// let cell = grid.cell(today).unwrap();
/// assert!(cell.is_today && cell.is_holiday);
/// ```
pub struct MonthGridBuilder {
    calculator: HolidayCalculator,
    custom: CustomHolidays,
    clock: Box<dyn Clock>,
}

impl MonthGridBuilder {
    /// Creates a builder using `calculator` and the system clock.
    pub fn new(calculator: HolidayCalculator) -> Self {
        Self {
            calculator,
            custom: CustomHolidays::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Adds caller-supplied holidays, overriding computed ones on the same date.
    pub fn with_custom_holidays(mut self, custom: CustomHolidays) -> Self {
        self.custom.extend(custom);
        self
    }

    /// Replaces the clock used to flag today's cell.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Builds the grid for `month` of `year`.
    ///
    /// The month is extended back to the preceding Monday and forward to the
    /// following Sunday, so every week has seven cells. Holidays are looked
    /// up in every year the grid touches.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Calendar`] for an invalid month or a grid
    /// reaching past the representable date range, and
    /// [`GridError::Holiday`] if holiday computation fails.
    #[tracing::instrument(skip(self))]
    pub fn build(&self, year: i32, month: u32) -> Result<CalendarGrid, GridError> {
        let first = CalendarDate::from_parts(year, month, 1)?;
        let last = first.last_of_month();
        let out_of_range = || CalendarError::InvalidDate {
            year,
            month,
            day: 1,
        };
        let grid_start = first
            .checked_add_days(1 - i64::from(first.day_of_week()))
            .ok_or_else(out_of_range)?;
        let grid_end = last
            .checked_add_days(7 - i64::from(last.day_of_week()))
            .ok_or_else(out_of_range)?;

        let holidays = HolidayIndex::build(
            &self.calculator,
            grid_start.year()..=grid_end.year(),
            &self.custom,
        )?;
        let today = self.clock.today().date_only();

        let n_days = grid_start.days_until(grid_end) as usize + 1;
        let cells: Vec<DayCell> = date_sequence(grid_start, n_days)
            .into_iter()
            .map(|date| {
                let holiday_name = holidays.holiday_name(date).map(str::to_string);
                DayCell {
                    date,
                    in_month: date.year() == year && date.month() == month,
                    is_today: date == today,
                    is_weekend: date.is_weekend(),
                    is_holiday: holiday_name.is_some(),
                    holiday_name,
                }
            })
            .collect();

        let weeks: Vec<Week> = cells
            .chunks_exact(7)
            .map(|chunk| Week {
                cells: std::array::from_fn(|i| chunk[i].clone()),
            })
            .collect();

        debug!(
            %grid_start,
            %grid_end,
            n_weeks = weeks.len(),
            n_holidays = cells.iter().filter(|c| c.in_month && c.is_holiday).count(),
            "grid built"
        );
        Ok(CalendarGrid::new(year, month, weeks))
    }
}
