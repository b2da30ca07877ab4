//! Per-year holiday sets and a caller-owned multi-year index.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::RangeInclusive;

use kalends_calendar::CalendarDate;

use crate::calculator::HolidayCalculator;
use crate::error::HolidayError;

/// Caller-supplied holidays, keyed by date. These override computed entries.
pub type CustomHolidays = BTreeMap<CalendarDate, String>;

/// Anything that can name the holiday falling on a date.
pub trait HolidayLookup {
    /// Returns the holiday name for `date`, ignoring its time of day.
    fn holiday_name(&self, date: CalendarDate) -> Option<&str>;

    /// Returns `true` if `date` is a holiday.
    fn is_holiday(&self, date: CalendarDate) -> bool {
        self.holiday_name(date).is_some()
    }
}

/// The holidays of a single year, in date order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: i32,
    entries: BTreeMap<CalendarDate, String>,
}

impl HolidaySet {
    /// Creates an empty set for `year`.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            entries: BTreeMap::new(),
        }
    }

    /// Returns the year this set covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Records `name` on `date`, replacing any earlier name for that date.
    ///
    /// Returns `false` and leaves the set unchanged if `date` is in another
    /// year.
    pub fn insert(&mut self, date: CalendarDate, name: impl Into<String>) -> bool {
        if date.year() != self.year {
            return false;
        }
        self.entries.insert(date.date_only(), name.into());
        true
    }

    /// Returns the holiday name on `date`, if any.
    pub fn get(&self, date: CalendarDate) -> Option<&str> {
        self.entries.get(&date.date_only()).map(String::as_str)
    }

    /// Returns the holiday name on the ISO date `iso` (`YYYY-MM-DD`), if any.
    /// Unparseable input finds nothing.
    pub fn get_iso(&self, iso: &str) -> Option<&str> {
        iso.parse().ok().and_then(|date| self.get(date))
    }

    /// Returns `true` if `date` is in the set.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.entries.contains_key(&date.date_only())
    }

    /// Returns the number of holidays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(date, name)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (CalendarDate, &str)> {
        self.entries.iter().map(|(date, name)| (*date, name.as_str()))
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = (&'a CalendarDate, &'a String);
    type IntoIter = btree_map::Iter<'a, CalendarDate, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl HolidayLookup for HolidaySet {
    fn holiday_name(&self, date: CalendarDate) -> Option<&str> {
        self.get(date)
    }
}

/// Returns `true` if `date` is listed in `set`.
pub fn is_holiday(date: CalendarDate, set: &HolidaySet) -> bool {
    set.contains(date)
}

/// Holiday sets for a span of years, computed once up front.
///
/// This is the cache for workloads that repeatedly classify dates across
/// several years. It is owned by the caller and never shared implicitly.
#[derive(Debug, Clone, Default)]
pub struct HolidayIndex {
    years: BTreeMap<i32, HolidaySet>,
}

impl HolidayIndex {
    /// Computes the holiday set of every year in `years`.
    ///
    /// # Errors
    ///
    /// Propagates any error from
    /// [`HolidayCalculator::holidays_for_year`].
    pub fn build(
        calculator: &HolidayCalculator,
        years: RangeInclusive<i32>,
        custom: &CustomHolidays,
    ) -> Result<Self, HolidayError> {
        let years = years
            .map(|year| Ok((year, calculator.holidays_for_year(year, custom)?)))
            .collect::<Result<BTreeMap<_, _>, HolidayError>>()?;
        Ok(Self { years })
    }

    /// Returns the set for `year`, if it was indexed.
    pub fn year(&self, year: i32) -> Option<&HolidaySet> {
        self.years.get(&year)
    }

    /// Iterates over every indexed holiday in date order.
    pub fn iter(&self) -> impl Iterator<Item = (CalendarDate, &str)> {
        self.years.values().flat_map(HolidaySet::iter)
    }
}

impl HolidayLookup for HolidayIndex {
    fn holiday_name(&self, date: CalendarDate) -> Option<&str> {
        self.years.get(&date.year())?.get(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_parts(y, m, d).unwrap()
    }

    #[test]
    fn insert_rejects_other_years() {
        let mut set = HolidaySet::new(2024);
        assert!(set.insert(ymd(2024, 7, 4), "Independence Day"));
        assert!(!set.insert(ymd(2025, 7, 4), "Independence Day"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn later_insert_replaces_name() {
        let mut set = HolidaySet::new(2024);
        set.insert(ymd(2024, 12, 24), "Christmas Eve");
        set.insert(ymd(2024, 12, 24), "Office Closed");
        assert_eq!(set.get(ymd(2024, 12, 24)), Some("Office Closed"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn lookups_ignore_time_of_day() {
        let mut set = HolidaySet::new(2024);
        set.insert(ymd(2024, 1, 1).with_time(10, 0, 0).unwrap(), "New Year's Day");
        assert!(set.contains(ymd(2024, 1, 1)));
        assert!(is_holiday(ymd(2024, 1, 1).with_time(23, 0, 0).unwrap(), &set));
        assert_eq!(set.get_iso("2024-01-01"), Some("New Year's Day"));
        assert_eq!(set.get_iso("not a date"), None);
    }

    #[test]
    fn iteration_is_date_ordered() {
        let mut set = HolidaySet::new(2024);
        set.insert(ymd(2024, 12, 25), "Christmas Day");
        set.insert(ymd(2024, 1, 1), "New Year's Day");
        let dates: Vec<_> = set.iter().map(|(d, _)| d).collect();
        assert_eq!(dates, vec![ymd(2024, 1, 1), ymd(2024, 12, 25)]);
    }

    #[test]
    fn index_spans_years() {
        let calc = HolidayCalculator::new(vec![
            crate::HolidayRule::fixed("New Year's Day", 1, 1).unwrap(),
        ]);
        let index = HolidayIndex::build(&calc, 2023..=2025, &CustomHolidays::new()).unwrap();
        assert!(index.is_holiday(ymd(2023, 1, 1)));
        assert!(index.is_holiday(ymd(2025, 1, 1)));
        assert!(!index.is_holiday(ymd(2026, 1, 1)));
        assert_eq!(index.iter().count(), 3);
        assert_eq!(index.year(2024).map(HolidaySet::len), Some(1));
    }
}
