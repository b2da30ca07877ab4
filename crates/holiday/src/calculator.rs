//! Yearly holiday computation from a rule list.

use kalends_calendar::Weekday;
use tracing::debug;

use crate::error::HolidayError;
use crate::rule::{HolidayRule, RuleKind, WeekdayOrdinal};
use crate::set::{CustomHolidays, HolidaySet};

/// Computes holiday sets from fixed and moveable rules.
///
/// The calculator holds no per-year state; every call builds a fresh
/// [`HolidaySet`]. Use [`HolidayIndex`](crate::HolidayIndex) to keep results
/// for repeated queries.
///
/// # Example
///
/// ```
/// use kalends_calendar::CalendarDate;
/// use kalends_holiday::{CustomHolidays, HolidayCalculator};
///
/// let calc = HolidayCalculator::us_federal();
/// let set = calc.holidays_for_year(2024, &CustomHolidays::new()).unwrap();
/// let thanksgiving = CalendarDate::from_parts(2024, 11, 28).unwrap();
/// assert_eq!(set.get(thanksgiving), Some("Thanksgiving Day"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalculator {
    rules: Vec<HolidayRule>,
}

impl HolidayCalculator {
    /// Creates a calculator from a rule list.
    pub fn new(rules: Vec<HolidayRule>) -> Self {
        Self { rules }
    }

    /// Adds a rule.
    pub fn with_rule(mut self, rule: HolidayRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds every rule of `other`.
    pub fn with_rules_of(mut self, other: &HolidayCalculator) -> Self {
        self.rules.extend(other.rules.iter().cloned());
        self
    }

    /// Returns the configured rules.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// United States federal holidays.
    pub fn us_federal() -> Self {
        use WeekdayOrdinal::{Last, Nth};
        let fixed = |name: &'static str, month: u32, day: u32| {
            HolidayRule::from_kind(name, RuleKind::Fixed { month, day })
        };
        let nth = |name: &'static str, month: u32, weekday: Weekday, ordinal: WeekdayOrdinal| {
            HolidayRule::from_kind(
                name,
                RuleKind::NthWeekday {
                    month,
                    weekday,
                    ordinal,
                },
            )
        };
        Self::new(vec![
            fixed("New Year's Day", 1, 1),
            nth("Martin Luther King Jr. Day", 1, Weekday::Mon, Nth(3)),
            nth("Washington's Birthday", 2, Weekday::Mon, Nth(3)),
            nth("Memorial Day", 5, Weekday::Mon, Last),
            fixed("Juneteenth", 6, 19),
            fixed("Independence Day", 7, 4),
            nth("Labor Day", 9, Weekday::Mon, Nth(1)),
            nth("Columbus Day", 10, Weekday::Mon, Nth(2)),
            fixed("Veterans Day", 11, 11),
            nth("Thanksgiving Day", 11, Weekday::Thu, Nth(4)),
            fixed("Christmas Day", 12, 25),
        ])
    }

    /// Easter-relative Western Christian holidays.
    pub fn western_christian() -> Self {
        Self::new(vec![
            HolidayRule::easter_offset("Good Friday", -2),
            HolidayRule::easter_offset("Easter Sunday", 0),
            HolidayRule::easter_offset("Easter Monday", 1),
            HolidayRule::easter_offset("Ascension Day", 39),
            HolidayRule::easter_offset("Whit Monday", 50),
        ])
    }

    /// Computes the holidays of `year`.
    ///
    /// Fixed rules are applied first, then moveable rules, then `custom`
    /// entries dated in `year`. A later entry on the same date replaces the
    /// earlier name. A rule with no date this year (see
    /// [`HolidayError::RuleUnsatisfiable`]) contributes no holiday.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::Calendar`] if `year` is outside the
    /// representable range.
    #[tracing::instrument(skip(self, custom), fields(n_rules = self.rules.len()))]
    pub fn holidays_for_year(
        &self,
        year: i32,
        custom: &CustomHolidays,
    ) -> Result<HolidaySet, HolidayError> {
        let mut set = HolidaySet::new(year);

        let (fixed, moveable): (Vec<&HolidayRule>, Vec<&HolidayRule>) =
            self.rules.iter().partition(|rule| !rule.is_moveable());
        for rule in fixed.into_iter().chain(moveable) {
            match rule.date_in(year) {
                Ok(date) => {
                    set.insert(date, rule.name());
                }
                Err(HolidayError::RuleUnsatisfiable { .. }) => {
                    debug!(rule = %rule, year, "rule has no date this year, skipping");
                }
                Err(e) => return Err(e),
            }
        }

        let mut n_custom = 0usize;
        for (date, name) in custom {
            if set.insert(*date, name.as_str()) {
                n_custom += 1;
            }
        }

        debug!(year, n_holidays = set.len(), n_custom, "holiday set computed");
        Ok(set)
    }
}
