//! Wall-clock sources for "today".

use chrono::Local;

use crate::date::CalendarDate;

/// A source of the current date.
///
/// Everything that needs "today" takes a `Clock` so output can be pinned in
/// tests and reproducible runs.
pub trait Clock: Send + Sync {
    /// Returns the current date, without a time of day.
    fn today(&self) -> CalendarDate;
}

/// Reads the local system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_naive(Local::now().date_naive())
    }
}

/// A clock frozen at a fixed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(CalendarDate);

impl FixedClock {
    /// Creates a clock that always reports `date` (time of day is dropped).
    pub fn new(date: CalendarDate) -> Self {
        Self(date.date_only())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_pinned_date() {
        let date = CalendarDate::from_parts(2024, 3, 15)
            .unwrap()
            .with_time(12, 0, 0)
            .unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(clock.today(), date.date_only());
        assert_eq!(CalendarDate::today_from(&clock), date.date_only());
    }

    #[test]
    fn system_clock_has_no_time_of_day() {
        assert_eq!(SystemClock.today().time(), None);
    }

    #[test]
    fn clock_is_object_safe() {
        let pinned = FixedClock::new(CalendarDate::from_parts(2000, 1, 1).unwrap());
        let clocks: Vec<Box<dyn Clock>> = vec![Box::new(SystemClock), Box::new(pinned)];
        assert_eq!(clocks[1].today().year(), 2000);
    }
}
