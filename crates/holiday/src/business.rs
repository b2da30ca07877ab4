//! Business-day classification and arithmetic.

use kalends_calendar::{CalendarDate, DateRange};

use crate::error::HolidayError;
use crate::set::HolidayLookup;

/// What kind of day a date is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind<'a> {
    /// A weekday that is not a holiday.
    Business,
    /// Saturday or Sunday, not a holiday.
    Weekend,
    /// A holiday, whatever the weekday.
    Holiday(&'a str),
}

/// Classifies dates as business days against a set of holidays.
///
/// A business day is Monday through Friday and not a holiday. Stepping
/// operations walk one calendar day at a time, so their cost grows with the
/// span covered; build a [`BusinessDayIndex`] for year-scale repeated counts.
///
/// # Example
///
/// ```
/// use kalends_calendar::CalendarDate;
/// use kalends_holiday::{BusinessDayClassifier, HolidaySet};
///
/// let holidays = HolidaySet::new(2024);
/// let business = BusinessDayClassifier::new(&holidays);
/// let saturday = CalendarDate::from_parts(2024, 6, 1).unwrap();
/// assert_eq!(business.add_business_days(saturday, 1).to_string(), "2024-06-03");
/// ```
pub struct BusinessDayClassifier<'a, H: HolidayLookup + ?Sized> {
    holidays: &'a H,
}

impl<'a, H: HolidayLookup + ?Sized> BusinessDayClassifier<'a, H> {
    /// Creates a classifier over `holidays`.
    pub fn new(holidays: &'a H) -> Self {
        Self { holidays }
    }

    /// Returns `true` for Monday through Friday when not a holiday.
    pub fn is_business_day(&self, date: CalendarDate) -> bool {
        !date.is_weekend() && !self.holidays.is_holiday(date)
    }

    /// Classifies `date`. A holiday on a weekend reports as a holiday.
    pub fn classify(&self, date: CalendarDate) -> DayKind<'a> {
        match self.holidays.holiday_name(date) {
            Some(name) => DayKind::Holiday(name),
            None if date.is_weekend() => DayKind::Weekend,
            None => DayKind::Business,
        }
    }

    /// Moves `n` business days from `start`: forward for positive `n`,
    /// backward for negative. `n = 0` returns `start` unchanged, even if it
    /// is not a business day.
    pub fn add_business_days(&self, start: CalendarDate, n: i64) -> CalendarDate {
        let step = n.signum();
        let mut remaining = n.unsigned_abs();
        let mut date = start;
        while remaining > 0 {
            date = date.add_days(step);
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        date
    }

    /// Counts business days in `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::Calendar`] wrapping
    /// [`CalendarError::InvalidRange`](kalends_calendar::CalendarError::InvalidRange)
    /// if `start` is after `end`.
    pub fn count_business_days(
        &self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> Result<u64, HolidayError> {
        let range = DateRange::new(start, end)?;
        Ok(range.days().filter(|d| self.is_business_day(*d)).count() as u64)
    }

    /// Returns `date` if it is a business day, else the next one after it.
    pub fn next_business_day(&self, date: CalendarDate) -> CalendarDate {
        let mut date = date;
        while !self.is_business_day(date) {
            date = date.add_days(1);
        }
        date
    }

    /// Returns `date` if it is a business day, else the last one before it.
    pub fn previous_business_day(&self, date: CalendarDate) -> CalendarDate {
        let mut date = date;
        while !self.is_business_day(date) {
            date = date.add_days(-1);
        }
        date
    }
}

/// Precomputed business-day counts over a fixed span.
///
/// Stores a running total per day so that counting over any sub-range is a
/// subtraction instead of a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessDayIndex {
    span: DateRange,
    // prefix[i] = business days in span.start .. span.start + i (exclusive)
    prefix: Vec<u32>,
}

impl BusinessDayIndex {
    /// Classifies every day of `span` against `holidays`.
    pub fn build<H: HolidayLookup + ?Sized>(span: DateRange, holidays: &H) -> Self {
        let business = BusinessDayClassifier::new(holidays);
        let mut prefix = Vec::with_capacity(span.len_days() as usize + 1);
        let mut total = 0u32;
        prefix.push(total);
        for day in span.days() {
            if business.is_business_day(day) {
                total += 1;
            }
            prefix.push(total);
        }
        Self { span, prefix }
    }

    /// Returns the span this index covers.
    pub fn span(&self) -> DateRange {
        self.span
    }

    /// Returns whether `date` is a business day, or `None` outside the span.
    pub fn is_business_day(&self, date: CalendarDate) -> Option<bool> {
        let i = self.offset(date).ok()?;
        Some(self.prefix[i + 1] > self.prefix[i])
    }

    /// Counts business days in `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::Calendar`] if `start` is after `end`, or
    /// [`HolidayError::OutsideIndex`] if either bound falls outside the span.
    pub fn count(&self, start: CalendarDate, end: CalendarDate) -> Result<u64, HolidayError> {
        DateRange::new(start, end)?;
        let lo = self.offset(start)?;
        let hi = self.offset(end)?;
        Ok(u64::from(self.prefix[hi + 1] - self.prefix[lo]))
    }

    fn offset(&self, date: CalendarDate) -> Result<usize, HolidayError> {
        if !self.span.contains(date) {
            return Err(HolidayError::OutsideIndex {
                date,
                span: self.span,
            });
        }
        Ok(self.span.start().days_until(date.date_only()) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::HolidaySet;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_parts(y, m, d).unwrap()
    }

    fn july_2024() -> HolidaySet {
        let mut set = HolidaySet::new(2024);
        set.insert(ymd(2024, 7, 4), "Independence Day");
        set.insert(ymd(2024, 7, 6), "Saturday Festival");
        set
    }

    #[test]
    fn weekday_holiday_is_not_business() {
        let holidays = july_2024();
        let business = BusinessDayClassifier::new(&holidays);
        assert!(business.is_business_day(ymd(2024, 7, 3)));
        assert!(!business.is_business_day(ymd(2024, 7, 4)));
        assert!(!business.is_business_day(ymd(2024, 7, 7)));
    }

    #[test]
    fn classify_prefers_holiday() {
        let holidays = july_2024();
        let business = BusinessDayClassifier::new(&holidays);
        assert_eq!(business.classify(ymd(2024, 7, 3)), DayKind::Business);
        assert_eq!(
            business.classify(ymd(2024, 7, 4)),
            DayKind::Holiday("Independence Day")
        );
        assert_eq!(
            business.classify(ymd(2024, 7, 6)),
            DayKind::Holiday("Saturday Festival")
        );
        assert_eq!(business.classify(ymd(2024, 7, 7)), DayKind::Weekend);
    }

    #[test]
    fn add_business_days_skips_holidays_and_weekends() {
        let holidays = july_2024();
        let business = BusinessDayClassifier::new(&holidays);
        // Wed Jul 3 + 1 skips the Thursday holiday.
        assert_eq!(business.add_business_days(ymd(2024, 7, 3), 1), ymd(2024, 7, 5));
        assert_eq!(business.add_business_days(ymd(2024, 7, 3), 2), ymd(2024, 7, 8));
        assert_eq!(business.add_business_days(ymd(2024, 7, 8), -2), ymd(2024, 7, 3));
    }

    #[test]
    fn add_zero_business_days_is_identity() {
        let holidays = july_2024();
        let business = BusinessDayClassifier::new(&holidays);
        assert_eq!(business.add_business_days(ymd(2024, 7, 6), 0), ymd(2024, 7, 6));
    }

    #[test]
    fn next_and_previous() {
        let holidays = july_2024();
        let business = BusinessDayClassifier::new(&holidays);
        assert_eq!(business.next_business_day(ymd(2024, 7, 4)), ymd(2024, 7, 5));
        assert_eq!(business.next_business_day(ymd(2024, 7, 5)), ymd(2024, 7, 5));
        assert_eq!(business.previous_business_day(ymd(2024, 7, 7)), ymd(2024, 7, 5));
    }

    #[test]
    fn count_rejects_reversed_range() {
        let holidays = HolidaySet::new(2024);
        let business = BusinessDayClassifier::new(&holidays);
        assert!(matches!(
            business.count_business_days(ymd(2024, 6, 30), ymd(2024, 6, 1)),
            Err(HolidayError::Calendar(_))
        ));
    }

    #[test]
    fn index_matches_walking_count() {
        let holidays = july_2024();
        let span = DateRange::new(ymd(2024, 6, 1), ymd(2024, 8, 31)).unwrap();
        let index = BusinessDayIndex::build(span, &holidays);
        let business = BusinessDayClassifier::new(&holidays);

        for (start, end) in [
            (ymd(2024, 6, 1), ymd(2024, 6, 30)),
            (ymd(2024, 7, 1), ymd(2024, 7, 31)),
            (ymd(2024, 7, 4), ymd(2024, 7, 4)),
            (ymd(2024, 6, 1), ymd(2024, 8, 31)),
        ] {
            assert_eq!(
                index.count(start, end).unwrap(),
                business.count_business_days(start, end).unwrap(),
                "{start}..{end}"
            );
        }
        assert_eq!(index.is_business_day(ymd(2024, 7, 4)), Some(false));
        assert_eq!(index.is_business_day(ymd(2024, 7, 5)), Some(true));
        assert_eq!(index.is_business_day(ymd(2024, 9, 1)), None);
    }

    #[test]
    fn index_rejects_dates_outside_span() {
        let span = DateRange::new(ymd(2024, 6, 1), ymd(2024, 6, 30)).unwrap();
        let index = BusinessDayIndex::build(span, &HolidaySet::new(2024));
        assert!(matches!(
            index.count(ymd(2024, 6, 1), ymd(2024, 7, 1)),
            Err(HolidayError::OutsideIndex { .. })
        ));
    }
}
