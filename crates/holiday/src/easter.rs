//! Gregorian Easter computus.

use kalends_calendar::{CalendarDate, CalendarError};

/// Returns the date of Western (Gregorian) Easter Sunday in `year`.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher), valid for
/// the proleptic Gregorian calendar.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] only if `year` is outside the range
/// representable by [`CalendarDate`].
pub fn easter_sunday(year: i32) -> Result<CalendarDate, CalendarError> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114).div_euclid(31);
    let day = (h + l - 7 * m + 114).rem_euclid(31) + 1;

    // month is 3 or 4 and day is 1..=31 by construction
    CalendarDate::from_parts(year, month as u32, day as u32)
}
