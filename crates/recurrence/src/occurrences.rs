//! Lazy occurrence generation.

use std::collections::VecDeque;

use chrono::Datelike;
use kalends_calendar::{CalendarDate, days_in_month, is_leap_year};
use tracing::{debug, trace};

use crate::pattern::{Frequency, RecurrencePattern};

/// Iterator over the occurrences of a [`RecurrencePattern`].
///
/// Period `k` is anchored at `start + k * interval` units, always computed
/// from `start` so month-end clamping never accumulates. Each period expands
/// to its candidate days, which are filtered and yielded in order. Output is
/// strictly increasing.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    pattern: &'a RecurrencePattern,
    limit: usize,
    yielded: usize,
    period: u64,
    idle_periods: u64,
    pending: VecDeque<CalendarDate>,
    done: bool,
}

impl<'a> Occurrences<'a> {
    pub(crate) fn new(pattern: &'a RecurrencePattern, limit: usize) -> Self {
        Self {
            pattern,
            limit,
            yielded: 0,
            period: 0,
            idle_periods: 0,
            pending: VecDeque::new(),
            done: false,
        }
    }

    fn past_until(&self, date: CalendarDate) -> bool {
        self.pattern
            .until()
            .is_some_and(|until| date.date_only() > until.date_only())
    }

    fn finish(&mut self, reason: &'static str) -> Option<CalendarDate> {
        debug!(
            frequency = %self.pattern.frequency(),
            yielded = self.yielded,
            periods = self.period,
            reason,
            "recurrence finished"
        );
        self.done = true;
        self.pending.clear();
        None
    }

    /// Returns the unfiltered candidates of the next period, or `None` past
    /// the end of the representable range.
    fn advance_period(&mut self) -> Option<Vec<CalendarDate>> {
        let candidates = period_candidates(self.pattern, self.period)?;
        self.period += 1;
        Some(candidates)
    }
}

impl Iterator for Occurrences<'_> {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if self.yielded >= self.limit {
                return self.finish("limit reached");
            }

            if let Some(date) = self.pending.pop_front() {
                if self.past_until(date) {
                    return self.finish("until exceeded");
                }
                self.yielded += 1;
                return Some(date);
            }

            if self.idle_periods >= self.pattern.frequency().cycle_periods() {
                return self.finish("no match within a full calendar cycle");
            }

            let Some(candidates) = self.advance_period() else {
                return self.finish("date range exhausted");
            };
            if candidates.first().is_some_and(|d| self.past_until(*d)) {
                return self.finish("until exceeded");
            }

            let start = self.pattern.start().date_only();
            let before = self.pending.len();
            self.pending.extend(
                candidates
                    .into_iter()
                    .filter(|d| d.date_only() >= start && self.pattern.matches(*d)),
            );
            if self.pending.len() == before {
                self.idle_periods += 1;
            } else {
                trace!(
                    period = self.period - 1,
                    n = self.pending.len() - before,
                    "period produced candidates"
                );
                self.idle_periods = 0;
            }
        }
    }
}

/// Returns the candidate days of period `k`, in order, before filtering.
fn period_candidates(pattern: &RecurrencePattern, k: u64) -> Option<Vec<CalendarDate>> {
    let start = pattern.start();
    let steps = k.checked_mul(u64::from(pattern.interval()))?;
    let expand = pattern.expands_days();

    match pattern.frequency() {
        Frequency::Daily => Some(vec![start.checked_add_days(i64::try_from(steps).ok()?)?]),
        Frequency::Weekly => {
            let anchor = start.checked_add_days(i64::try_from(steps.checked_mul(7)?).ok()?)?;
            if !expand {
                return Some(vec![anchor]);
            }
            let monday = anchor.checked_add_days(1 - i64::from(anchor.day_of_week()))?;
            consecutive_days(monday, 7)
        }
        Frequency::Monthly => {
            let anchor = start.checked_add_months(i32::try_from(steps).ok()?)?;
            if !expand {
                return Some(vec![anchor]);
            }
            whole_month(anchor)
        }
        Frequency::Yearly => {
            let anchor = start.checked_add_months(i32::try_from(steps.checked_mul(12)?).ok()?)?;
            if expand {
                let jan1 = anchor.checked_add_days(1 - i64::from(anchor.naive_date().ordinal()))?;
                let len = if is_leap_year(anchor.year()) { 366 } else { 365 };
                return consecutive_days(jan1, len);
            }
            if pattern.months().is_empty() {
                return Some(vec![anchor]);
            }
            // Same day-of-month as `start` in each allowed month, clamped.
            let first = anchor.checked_add_days(1 - i64::from(anchor.day()))?;
            pattern
                .months()
                .iter()
                .map(|&month| {
                    let first_of = first.checked_add_months(month as i32 - first.month() as i32)?;
                    let max_day = days_in_month(first_of.year(), month)?;
                    first_of.checked_add_days(i64::from(start.day().min(max_day)) - 1)
                })
                .collect()
        }
    }
}

fn whole_month(anchor: CalendarDate) -> Option<Vec<CalendarDate>> {
    let first = anchor.checked_add_days(1 - i64::from(anchor.day()))?;
    let len = days_in_month(first.year(), first.month())?;
    consecutive_days(first, len)
}

fn consecutive_days(first: CalendarDate, n: u32) -> Option<Vec<CalendarDate>> {
    (0..n)
        .map(|i| first.checked_add_days(i64::from(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use kalends_calendar::Weekday;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_parts(y, m, d).unwrap()
    }

    #[test]
    fn daily_interval() {
        let pattern = RecurrencePattern::builder(ymd(2024, 2, 27), Frequency::Daily)
            .with_interval(2)
            .build()
            .unwrap();
        let dates: Vec<_> = pattern.occurrences(3).collect();
        assert_eq!(dates, vec![ymd(2024, 2, 27), ymd(2024, 2, 29), ymd(2024, 3, 2)]);
    }

    #[test]
    fn monthly_clamps_without_drift() {
        let pattern = RecurrencePattern::builder(ymd(2024, 1, 31), Frequency::Monthly)
            .build()
            .unwrap();
        let dates: Vec<_> = pattern.occurrences(4).collect();
        assert_eq!(
            dates,
            vec![ymd(2024, 1, 31), ymd(2024, 2, 29), ymd(2024, 3, 31), ymd(2024, 4, 30)]
        );
    }

    #[test]
    fn yearly_leap_day_clamps() {
        let pattern = RecurrencePattern::builder(ymd(2024, 2, 29), Frequency::Yearly)
            .build()
            .unwrap();
        let dates: Vec<_> = pattern.occurrences(5).collect();
        assert_eq!(dates[1], ymd(2025, 2, 28));
        assert_eq!(dates[4], ymd(2028, 2, 29));
    }

    #[test]
    fn weekly_expands_weekdays() {
        let pattern = RecurrencePattern::builder(ymd(2024, 3, 5), Frequency::Weekly)
            .with_weekdays([Weekday::Tue, Weekday::Thu])
            .build()
            .unwrap();
        let dates: Vec<_> = pattern.occurrences(4).collect();
        assert_eq!(
            dates,
            vec![ymd(2024, 3, 5), ymd(2024, 3, 7), ymd(2024, 3, 12), ymd(2024, 3, 14)]
        );
    }

    #[test]
    fn weekly_drops_days_before_start() {
        // Start on Wednesday; Monday of the same week must not appear.
        let pattern = RecurrencePattern::builder(ymd(2024, 3, 6), Frequency::Weekly)
            .with_weekdays([Weekday::Mon, Weekday::Fri])
            .build()
            .unwrap();
        let dates: Vec<_> = pattern.occurrences(3).collect();
        assert_eq!(dates, vec![ymd(2024, 3, 8), ymd(2024, 3, 11), ymd(2024, 3, 15)]);
    }

    #[test]
    fn monthly_days_of_month_skip_short_months() {
        let pattern = RecurrencePattern::builder(ymd(2024, 1, 15), Frequency::Monthly)
            .with_days_of_month([31])
            .build()
            .unwrap();
        let dates: Vec<_> = pattern.occurrences(3).collect();
        assert_eq!(dates, vec![ymd(2024, 1, 31), ymd(2024, 3, 31), ymd(2024, 5, 31)]);
    }

    #[test]
    fn yearly_with_month_filter_uses_start_day() {
        let pattern = RecurrencePattern::builder(ymd(2024, 1, 31), Frequency::Yearly)
            .with_months([2, 6])
            .build()
            .unwrap();
        let dates: Vec<_> = pattern.occurrences(4).collect();
        assert_eq!(
            dates,
            vec![ymd(2024, 2, 29), ymd(2024, 6, 30), ymd(2025, 2, 28), ymd(2025, 6, 30)]
        );
    }

    #[test]
    fn until_is_inclusive() {
        let pattern = RecurrencePattern::builder(ymd(2024, 3, 1), Frequency::Daily)
            .with_until(ymd(2024, 3, 3))
            .build()
            .unwrap();
        assert_eq!(pattern.occurrences(100).count(), 3);
    }

    #[test]
    fn mutually_exclusive_filters_terminate_empty() {
        let pattern = RecurrencePattern::builder(ymd(2024, 1, 1), Frequency::Daily)
            .with_months([2])
            .with_days_of_month([30])
            .build()
            .unwrap();
        assert_eq!(pattern.occurrences(10).next(), None);
    }

    #[test]
    fn yearly_month_filter_within_first_year() {
        let pattern = RecurrencePattern::builder(ymd(2024, 1, 1), Frequency::Yearly)
            .with_months([3])
            .build()
            .unwrap();
        let first = pattern.occurrences(1).next().unwrap();
        assert_eq!(first, ymd(2024, 3, 1));
    }

    #[test]
    fn limit_zero_is_empty() {
        let pattern = RecurrencePattern::builder(ymd(2024, 1, 1), Frequency::Daily)
            .build()
            .unwrap();
        assert_eq!(pattern.occurrences(0).count(), 0);
    }

    #[test]
    fn keeps_start_time_of_day() {
        let start = ymd(2024, 3, 5).with_time(9, 30, 0).unwrap();
        let pattern = RecurrencePattern::builder(start, Frequency::Weekly)
            .with_weekdays([Weekday::Tue, Weekday::Thu])
            .build()
            .unwrap();
        assert!(pattern.occurrences(4).all(|d| d.time() == start.time()));
    }
}
