//! Date sequence generation.

use crate::date::CalendarDate;

/// Generates a contiguous sequence of dates.
///
/// Starting from `start`, produces `n_days` consecutive dates by repeatedly
/// advancing one day. Month and year boundaries, including February 29, are
/// handled by the Gregorian calendar. The sequence stops early only if it
/// reaches the end of the representable date range.
///
/// # Example
///
/// ```
/// use kalends_calendar::{CalendarDate, date_sequence};
///
/// let start = CalendarDate::from_parts(2024, 2, 28).unwrap();
/// let dates = date_sequence(start, 3);
/// assert_eq!(dates[1].to_string(), "2024-02-29");
/// assert_eq!(dates[2].to_string(), "2024-03-01");
/// ```
pub fn date_sequence(start: CalendarDate, n_days: usize) -> Vec<CalendarDate> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        match current.checked_add_days(1) {
            Some(next) => current = next,
            None => break,
        }
        dates.push(current);
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let start = CalendarDate::from_parts(2000, 1, 1).unwrap();
        assert!(date_sequence(start, 0).is_empty());
    }

    #[test]
    fn single() {
        let start = CalendarDate::from_parts(2000, 6, 15).unwrap();
        assert_eq!(date_sequence(start, 1), vec![start]);
    }

    #[test]
    fn leap_year_length() {
        let start = CalendarDate::from_parts(2024, 1, 1).unwrap();
        let dates = date_sequence(start, 366);
        let last = dates.last().unwrap();
        assert_eq!((last.year(), last.month(), last.day()), (2024, 12, 31));
    }

    #[test]
    fn common_year_wraps() {
        let start = CalendarDate::from_parts(2023, 1, 1).unwrap();
        let dates = date_sequence(start, 366);
        let last = dates.last().unwrap();
        assert_eq!((last.year(), last.month(), last.day()), (2024, 1, 1));
    }

    #[test]
    fn keeps_time_of_day() {
        let start = CalendarDate::from_parts(2024, 1, 1)
            .unwrap()
            .with_time(7, 0, 0)
            .unwrap();
        assert!(date_sequence(start, 3).iter().all(|d| d.time() == start.time()));
    }
}
