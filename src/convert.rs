//! Pure conversion functions: TOML config structs -> library types.

use anyhow::{Context, Result, bail};

use kalends_calendar::{CalendarDate, Weekday};
use kalends_holiday::{CustomHolidays, HolidayCalculator, HolidayRule, WeekdayOrdinal};

use crate::config::{HolidaysToml, OrdinalToml, RuleToml};

/// Parses a holiday preset name into its calculator.
pub fn parse_preset(s: &str) -> Result<HolidayCalculator> {
    match s.to_lowercase().as_str() {
        "us-federal" | "us" => Ok(HolidayCalculator::us_federal()),
        "western-christian" | "christian" => Ok(HolidayCalculator::western_christian()),
        other => bail!("unknown holiday preset: {other:?}"),
    }
}

/// Parses a weekday name such as `"mon"` or `"Monday"`.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    s.parse::<Weekday>()
        .map_err(|_| anyhow::anyhow!("unknown weekday: {s:?}"))
}

/// Converts a TOML ordinal (`1`..`5` or `"last"`) into a [`WeekdayOrdinal`].
pub fn parse_ordinal(o: &OrdinalToml) -> Result<WeekdayOrdinal> {
    match o {
        OrdinalToml::Number(n) => Ok(WeekdayOrdinal::Nth(*n)),
        OrdinalToml::Name(s) => match s.to_lowercase().as_str() {
            "last" => Ok(WeekdayOrdinal::Last),
            "first" => Ok(WeekdayOrdinal::Nth(1)),
            "second" => Ok(WeekdayOrdinal::Nth(2)),
            "third" => Ok(WeekdayOrdinal::Nth(3)),
            "fourth" => Ok(WeekdayOrdinal::Nth(4)),
            "fifth" => Ok(WeekdayOrdinal::Nth(5)),
            other => bail!("unknown ordinal: {other:?}"),
        },
    }
}

/// Builds a [`HolidayRule`] from its TOML form.
pub fn build_rule(rule: &RuleToml) -> Result<HolidayRule> {
    let name = rule.name.as_str();
    let month = || {
        rule.month
            .with_context(|| format!("rule {name:?}: `month` is required"))
    };
    let built = match rule.kind.to_lowercase().as_str() {
        "fixed" => {
            let day = rule
                .day
                .with_context(|| format!("rule {name:?}: `day` is required"))?;
            HolidayRule::fixed(name, month()?, day)?
        }
        "nth_weekday" => {
            let weekday = rule
                .weekday
                .as_deref()
                .with_context(|| format!("rule {name:?}: `weekday` is required"))?;
            let ordinal = rule
                .ordinal
                .as_ref()
                .with_context(|| format!("rule {name:?}: `ordinal` is required"))?;
            HolidayRule::nth_weekday(
                name,
                month()?,
                parse_weekday(weekday)?,
                parse_ordinal(ordinal)?,
            )?
        }
        "easter" => HolidayRule::easter_offset(name, rule.offset.unwrap_or(0)),
        other => bail!("rule {name:?}: unknown kind {other:?}"),
    };
    Ok(built)
}

/// Builds the [`HolidayCalculator`] from presets plus extra rules.
pub fn build_calculator(holidays: &HolidaysToml) -> Result<HolidayCalculator> {
    let mut calc = HolidayCalculator::default();
    for preset in &holidays.presets {
        calc = calc.with_rules_of(&parse_preset(preset)?);
    }
    for rule in &holidays.rules {
        calc = calc.with_rule(build_rule(rule)?);
    }
    Ok(calc)
}

/// Parses the `[holidays].custom` table into [`CustomHolidays`].
pub fn build_custom(holidays: &HolidaysToml) -> Result<CustomHolidays> {
    holidays
        .custom
        .iter()
        .map(|(date, name)| {
            let date: CalendarDate = date
                .parse()
                .with_context(|| format!("invalid custom holiday date {date:?}"))?;
            Ok((date, name.clone()))
        })
        .collect()
}
