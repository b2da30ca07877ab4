//! Closed, day-granular date intervals.

use std::fmt;
use std::str::FromStr;

use crate::date::CalendarDate;
use crate::error::CalendarError;

/// An inclusive range of whole days, `start..=end`.
///
/// Endpoints never carry a time of day, and `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Creates a range covering `start` through `end`, both inclusive.
    ///
    /// Any time of day on the endpoints is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRange`] if `start` falls after `end`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, CalendarError> {
        let (start, end) = (start.date_only(), end.date_only());
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a single-day range.
    pub fn single(date: CalendarDate) -> Self {
        let date = date.date_only();
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the first day of the range.
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the last day of the range.
    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns the number of days covered, counting both endpoints.
    pub fn len_days(&self) -> u64 {
        self.start.days_until(self.end).unsigned_abs() + 1
    }

    /// Returns `true` if `date` falls on a day inside the range.
    pub fn contains(&self, date: CalendarDate) -> bool {
        let date = date.date_only();
        self.start <= date && date <= self.end
    }

    /// Returns `true` if the two ranges share at least one day.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Returns the days shared by both ranges, or `None` if they are disjoint.
    pub fn overlap(&self, other: &DateRange) -> Option<DateRange> {
        self.overlaps(other).then(|| DateRange {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Returns `true` if one range ends the day before the other starts.
    pub fn is_adjacent(&self, other: &DateRange) -> bool {
        let touches = |a: &DateRange, b: &DateRange| {
            a.end.checked_add_days(1).is_some_and(|next| next == b.start)
        };
        touches(self, other) || touches(other, self)
    }

    /// Returns the union of two overlapping or adjacent ranges.
    ///
    /// Returns `None` when a gap separates them, since the union would not be
    /// a single continuous range.
    pub fn merge(&self, other: &DateRange) -> Option<DateRange> {
        (self.overlaps(other) || self.is_adjacent(other)).then(|| DateRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }

    /// Splits the range so that `date` starts the second part.
    ///
    /// If `date` lies strictly inside the range, returns
    /// `[start, date - 1]` and `[date, end]`. Otherwise the range is returned
    /// unsplit as the only element.
    pub fn split(&self, date: CalendarDate) -> Vec<DateRange> {
        let date = date.date_only();
        if self.start < date && date < self.end {
            vec![
                DateRange {
                    start: self.start,
                    end: date.add_days(-1),
                },
                DateRange {
                    start: date,
                    end: self.end,
                },
            ]
        } else {
            vec![*self]
        }
    }

    /// Iterates over every day in the range in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + use<> {
        let start = self.start;
        (0..self.len_days()).map_while(move |offset| {
            i64::try_from(offset)
                .ok()
                .and_then(|offset| start.checked_add_days(offset))
        })
    }

    /// Merges any collection of ranges into sorted, disjoint, non-adjacent
    /// ranges covering exactly the same days.
    pub fn coalesce<I>(ranges: I) -> Vec<DateRange>
    where
        I: IntoIterator<Item = DateRange>,
    {
        let mut sorted: Vec<DateRange> = ranges.into_iter().collect();
        sorted.sort();

        let mut out: Vec<DateRange> = Vec::with_capacity(sorted.len());
        for range in sorted {
            match out.last_mut() {
                Some(last) => match last.merge(&range) {
                    Some(merged) => *last = merged,
                    None => out.push(range),
                },
                None => out.push(range),
            }
        }
        out
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl FromStr for DateRange {
    type Err = CalendarError;

    /// Parses `START..END`, both ISO dates.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.split_once("..").ok_or_else(|| CalendarError::Parse {
            input: s.to_string(),
            reason: "expected START..END".to_string(),
        })?;
        DateRange::new(start.parse()?, end.parse()?)
    }
}

impl serde::Serialize for DateRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_parts(y, m, d).unwrap()
    }

    fn range(a: (u32, u32), b: (u32, u32)) -> DateRange {
        DateRange::new(ymd(2024, a.0, a.1), ymd(2024, b.0, b.1)).unwrap()
    }

    #[test]
    fn new_rejects_reversed_bounds() {
        let err = DateRange::new(ymd(2024, 3, 10), ymd(2024, 3, 1)).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidRange { .. }));
    }

    #[test]
    fn new_strips_time_of_day() {
        let start = ymd(2024, 3, 1).with_time(18, 0, 0).unwrap();
        let end = ymd(2024, 3, 1).with_time(9, 0, 0).unwrap();
        let r = DateRange::new(start, end).unwrap();
        assert_eq!(r.len_days(), 1);
        assert_eq!(r.start().time(), None);
    }

    #[test]
    fn contains_is_inclusive() {
        let r = range((3, 1), (3, 10));
        assert!(r.contains(ymd(2024, 3, 1)));
        assert!(r.contains(ymd(2024, 3, 10)));
        assert!(r.contains(ymd(2024, 3, 10).with_time(23, 59, 59).unwrap()));
        assert!(!r.contains(ymd(2024, 2, 29)));
        assert!(!r.contains(ymd(2024, 3, 11)));
    }

    #[test]
    fn overlap_of_intersecting_ranges() {
        let a = range((3, 1), (3, 10));
        let b = range((3, 5), (3, 15));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert_eq!(a.overlap(&b), Some(range((3, 5), (3, 10))));
    }

    #[test]
    fn overlap_of_disjoint_ranges_is_none() {
        let a = range((3, 1), (3, 10));
        let b = range((3, 11), (3, 20));
        assert!(!a.overlaps(&b));
        assert_eq!(a.overlap(&b), None);
    }

    #[test]
    fn adjacency_both_directions() {
        let a = range((3, 1), (3, 10));
        let b = range((3, 11), (3, 20));
        assert!(a.is_adjacent(&b));
        assert!(b.is_adjacent(&a));
        assert!(!a.is_adjacent(&range((3, 12), (3, 20))));
        assert!(!a.is_adjacent(&range((3, 10), (3, 20))));
    }

    #[test]
    fn merge_adjacent_and_overlapping() {
        let a = range((3, 1), (3, 10));
        assert_eq!(a.merge(&range((3, 11), (3, 20))), Some(range((3, 1), (3, 20))));
        assert_eq!(a.merge(&range((2, 20), (3, 5))), Some(range((2, 20), (3, 10))));
        assert_eq!(a.merge(&range((3, 12), (3, 20))), None);
    }

    #[test]
    fn split_interior_date() {
        let parts = range((3, 1), (3, 10)).split(ymd(2024, 3, 4));
        assert_eq!(parts, vec![range((3, 1), (3, 3)), range((3, 4), (3, 10))]);
    }

    #[test]
    fn split_at_bounds_or_outside_is_unsplit() {
        let r = range((3, 1), (3, 10));
        assert_eq!(r.split(ymd(2024, 3, 1)), vec![r]);
        assert_eq!(r.split(ymd(2024, 3, 10)), vec![r]);
        assert_eq!(r.split(ymd(2024, 4, 1)), vec![r]);
    }

    #[test]
    fn days_iterates_inclusive() {
        let days: Vec<_> = range((2, 27), (3, 2)).days().collect();
        assert_eq!(days.len(), 5);
        assert_eq!(days[2], ymd(2024, 2, 29));
        assert_eq!(days[4], ymd(2024, 3, 2));
    }

    #[test]
    fn coalesce_merges_touching_ranges() {
        let merged = DateRange::coalesce([
            range((3, 15), (3, 20)),
            range((3, 1), (3, 5)),
            range((3, 6), (3, 8)),
            range((3, 18), (3, 25)),
        ]);
        assert_eq!(merged, vec![range((3, 1), (3, 8)), range((3, 15), (3, 25))]);
    }

    #[test]
    fn parse_and_display() {
        let r: DateRange = "2024-03-01..2024-03-10".parse().unwrap();
        assert_eq!(r, range((3, 1), (3, 10)));
        assert_eq!(r.to_string(), "2024-03-01..2024-03-10");
        assert!("2024-03-01".parse::<DateRange>().is_err());
        assert!("2024-03-10..2024-03-01".parse::<DateRange>().is_err());
    }
}
