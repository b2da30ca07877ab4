//! Holiday rules: fixed month/day, nth weekday of month, Easter-relative.

use std::fmt;

use kalends_calendar::{CalendarDate, Weekday, days_in_month};

use crate::easter::easter_sunday;
use crate::error::HolidayError;

/// Which occurrence of a weekday within a month a rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekdayOrdinal {
    /// The nth occurrence, counted from the first day of the month (1..=5).
    Nth(u8),
    /// The final occurrence in the month.
    Last,
}

impl fmt::Display for WeekdayOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nth(1) => write!(f, "1st"),
            Self::Nth(2) => write!(f, "2nd"),
            Self::Nth(3) => write!(f, "3rd"),
            Self::Nth(n) => write!(f, "{n}th"),
            Self::Last => write!(f, "last"),
        }
    }
}

/// How a holiday's date is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Same month and day every year.
    Fixed {
        /// Month (1..=12).
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// A given occurrence of a weekday in a month, e.g. the fourth Thursday
    /// of November.
    NthWeekday {
        /// Month (1..=12).
        month: u32,
        /// Target weekday.
        weekday: Weekday,
        /// Which occurrence.
        ordinal: WeekdayOrdinal,
    },
    /// A fixed offset in days from Easter Sunday.
    EasterOffset {
        /// Days after Easter Sunday (negative for before).
        days: i64,
    },
}

/// A named rule that yields at most one holiday date per year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HolidayRule {
    name: String,
    kind: RuleKind,
}

impl HolidayRule {
    /// Creates a rule for a holiday on the same month and day every year.
    ///
    /// February 29 is accepted; it yields a holiday only in leap years.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::InvalidRule`] if the month is outside 1..=12 or
    /// the day can never occur in that month.
    pub fn fixed(name: impl Into<String>, month: u32, day: u32) -> Result<Self, HolidayError> {
        let name = name.into();
        let max_day = days_in_month(2000, month).ok_or_else(|| HolidayError::InvalidRule {
            name: name.clone(),
            reason: format!("month {month} is not in 1..=12"),
        })?;
        if !(1..=max_day).contains(&day) {
            return Err(HolidayError::InvalidRule {
                name,
                reason: format!("day {day} never occurs in month {month}"),
            });
        }
        Ok(Self::from_kind(name, RuleKind::Fixed { month, day }))
    }

    /// Creates a rule for the nth (or last) given weekday of a month.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::InvalidRule`] if the month is outside 1..=12 or
    /// an `Nth` ordinal is outside 1..=5.
    pub fn nth_weekday(
        name: impl Into<String>,
        month: u32,
        weekday: Weekday,
        ordinal: WeekdayOrdinal,
    ) -> Result<Self, HolidayError> {
        let name = name.into();
        if !(1..=12).contains(&month) {
            return Err(HolidayError::InvalidRule {
                name,
                reason: format!("month {month} is not in 1..=12"),
            });
        }
        match ordinal {
            WeekdayOrdinal::Nth(n) if !(1..=5).contains(&n) => {
                return Err(HolidayError::InvalidRule {
                    name,
                    reason: format!("occurrence {n} is not in 1..=5"),
                });
            }
            _ => {}
        }
        Ok(Self::from_kind(
            name,
            RuleKind::NthWeekday {
                month,
                weekday,
                ordinal,
            },
        ))
    }

    /// Creates a rule for a holiday `days` after Easter Sunday.
    pub fn easter_offset(name: impl Into<String>, days: i64) -> Self {
        Self::from_kind(name.into(), RuleKind::EasterOffset { days })
    }

    /// Builds a rule from parts already known to be valid.
    pub(crate) fn from_kind(name: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Returns the holiday name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns how the date is determined.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns `true` for rules whose date moves from year to year.
    pub fn is_moveable(&self) -> bool {
        !matches!(self.kind, RuleKind::Fixed { .. })
    }

    /// Computes this rule's date in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::RuleUnsatisfiable`] if the rule has no date in
    /// `year` (a fifth weekday that does not exist, or February 29 in a
    /// common year). Returns [`HolidayError::Calendar`] if `year` is outside
    /// the representable range.
    pub fn date_in(&self, year: i32) -> Result<CalendarDate, HolidayError> {
        let found = match self.kind {
            RuleKind::Fixed { month, day } => {
                CalendarDate::from_parts(year, month, 1)?;
                CalendarDate::from_parts(year, month, day).ok()
            }
            RuleKind::NthWeekday {
                month,
                weekday,
                ordinal,
            } => {
                let first = CalendarDate::from_parts(year, month, 1)?;
                match ordinal {
                    WeekdayOrdinal::Nth(n) => scan_forward(first, weekday, n),
                    WeekdayOrdinal::Last => scan_backward(first.last_of_month(), weekday),
                }
            }
            RuleKind::EasterOffset { days } => easter_sunday(year)?.checked_add_days(days),
        };
        found.ok_or_else(|| HolidayError::RuleUnsatisfiable {
            name: self.name.clone(),
            year,
        })
    }
}

impl fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RuleKind::Fixed { month, day } => {
                write!(f, "{} ({month:02}-{day:02})", self.name)
            }
            RuleKind::NthWeekday {
                month,
                weekday,
                ordinal,
            } => write!(f, "{} ({ordinal} {weekday} of month {month})", self.name),
            RuleKind::EasterOffset { days } => write!(f, "{} (Easter {days:+} days)", self.name),
        }
    }
}

/// Walks forward from the first of the month, counting `weekday` hits until
/// the nth one. Returns `None` if the month ends first.
fn scan_forward(first: CalendarDate, weekday: Weekday, n: u8) -> Option<CalendarDate> {
    let mut seen = 0u8;
    let mut day = first;
    while day.month() == first.month() {
        if day.weekday() == weekday {
            seen += 1;
            if seen == n {
                return Some(day);
            }
        }
        day = day.checked_add_days(1)?;
    }
    None
}

/// Walks backward from the last of the month to the final `weekday`.
fn scan_backward(last: CalendarDate, weekday: Weekday) -> Option<CalendarDate> {
    let mut day = last;
    while day.month() == last.month() {
        if day.weekday() == weekday {
            return Some(day);
        }
        day = day.checked_add_days(-1)?;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_parts(y, m, d).unwrap()
    }

    #[test]
    fn fixed_rule() {
        let rule = HolidayRule::fixed("Christmas Day", 12, 25).unwrap();
        assert!(!rule.is_moveable());
        assert_eq!(rule.date_in(2024).unwrap(), ymd(2024, 12, 25));
    }

    #[test]
    fn fixed_rule_validation() {
        assert!(matches!(
            HolidayRule::fixed("Bad", 13, 1),
            Err(HolidayError::InvalidRule { .. })
        ));
        assert!(matches!(
            HolidayRule::fixed("Bad", 4, 31),
            Err(HolidayError::InvalidRule { .. })
        ));
    }

    #[test]
    fn leap_day_rule_only_in_leap_years() {
        let rule = HolidayRule::fixed("Leap Day", 2, 29).unwrap();
        assert_eq!(rule.date_in(2024).unwrap(), ymd(2024, 2, 29));
        assert_eq!(
            rule.date_in(2023).unwrap_err(),
            HolidayError::RuleUnsatisfiable {
                name: "Leap Day".to_string(),
                year: 2023,
            }
        );
    }

    #[test]
    fn thanksgiving_is_fourth_thursday() {
        let rule =
            HolidayRule::nth_weekday("Thanksgiving", 11, Weekday::Thu, WeekdayOrdinal::Nth(4))
                .unwrap();
        assert_eq!(rule.date_in(2023).unwrap(), ymd(2023, 11, 23));
        assert_eq!(rule.date_in(2024).unwrap(), ymd(2024, 11, 28));
        assert_eq!(rule.date_in(2025).unwrap(), ymd(2025, 11, 27));
    }

    #[test]
    fn memorial_day_is_last_monday() {
        let rule =
            HolidayRule::nth_weekday("Memorial Day", 5, Weekday::Mon, WeekdayOrdinal::Last)
                .unwrap();
        assert_eq!(rule.date_in(2024).unwrap(), ymd(2024, 5, 27));
        assert_eq!(rule.date_in(2021).unwrap(), ymd(2021, 5, 31));
    }

    #[test]
    fn fifth_weekday_may_be_unsatisfiable() {
        let rule =
            HolidayRule::nth_weekday("Fifth Monday", 2, Weekday::Mon, WeekdayOrdinal::Nth(5))
                .unwrap();
        // February 2023 has four Mondays, February 2016 has five.
        assert!(matches!(
            rule.date_in(2023),
            Err(HolidayError::RuleUnsatisfiable { year: 2023, .. })
        ));
        assert_eq!(rule.date_in(2016).unwrap(), ymd(2016, 2, 29));
    }

    #[test]
    fn nth_weekday_validation() {
        assert!(
            HolidayRule::nth_weekday("Bad", 1, Weekday::Mon, WeekdayOrdinal::Nth(0)).is_err()
        );
        assert!(
            HolidayRule::nth_weekday("Bad", 1, Weekday::Mon, WeekdayOrdinal::Nth(6)).is_err()
        );
        assert!(HolidayRule::nth_weekday("Bad", 0, Weekday::Mon, WeekdayOrdinal::Last).is_err());
    }

    #[test]
    fn easter_offsets() {
        let good_friday = HolidayRule::easter_offset("Good Friday", -2);
        let easter_monday = HolidayRule::easter_offset("Easter Monday", 1);
        assert_eq!(good_friday.date_in(2024).unwrap(), ymd(2024, 3, 29));
        assert_eq!(easter_monday.date_in(2025).unwrap(), ymd(2025, 4, 21));
        assert!(good_friday.is_moveable());
    }

    #[test]
    fn display_describes_rule() {
        let rule =
            HolidayRule::nth_weekday("Labor Day", 9, Weekday::Mon, WeekdayOrdinal::Nth(1))
                .unwrap();
        assert_eq!(rule.to_string(), "Labor Day (1st Mon of month 9)");
        let rule = HolidayRule::easter_offset("Good Friday", -2);
        assert_eq!(rule.to_string(), "Good Friday (Easter -2 days)");
    }
}
