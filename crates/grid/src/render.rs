//! Plain-text rendering in the style of `cal`.

use crate::grid::{CalendarGrid, DayCell};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_HEADER: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

const CELL_WIDTH: usize = 4;

/// Renders `grid` as a text block.
///
/// Each cell is four columns wide. Days outside the month are blank, today
/// is wrapped in brackets and holidays are followed by `*`. Holidays in the
/// month are listed below the grid.
///
/// ```text
///          March 2024
///  Mo  Tu  We  Th  Fr  Sa  Su
///                    1   2   3
///   4 [ 5]  6   7   8   9  10
/// ```
pub fn render_text(grid: &CalendarGrid) -> String {
    let width = CELL_WIDTH * 7;
    let name = MONTH_NAMES
        .get(grid.month() as usize - 1)
        .copied()
        .unwrap_or("?");
    let mut out = String::new();

    let title = format!("{name} {}", grid.year());
    push_line(&mut out, &format!("{title:^width$}"));

    let header: String = WEEKDAY_HEADER.iter().map(|d| format!(" {d} ")).collect();
    push_line(&mut out, &header);

    for week in grid.weeks() {
        let row: String = week.cells.iter().map(render_cell).collect();
        push_line(&mut out, &row);
    }

    let mut holidays = grid
        .cells()
        .filter(|c| c.in_month)
        .filter_map(|c| c.holiday_name.as_deref().map(|n| (c.date, n)))
        .peekable();
    if holidays.peek().is_some() {
        out.push('\n');
        for (date, holiday) in holidays {
            push_line(&mut out, &format!("* {date} {holiday}"));
        }
    }
    out
}

/// Appends `line` without trailing blanks, then a newline.
fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn render_cell(cell: &DayCell) -> String {
    if !cell.in_month {
        return " ".repeat(CELL_WIDTH);
    }
    let (open, close) = match (cell.is_today, cell.is_holiday) {
        (true, _) => ('[', ']'),
        (false, true) => (' ', '*'),
        (false, false) => (' ', ' '),
    };
    format!("{open}{:>2}{close}", cell.date.day())
}

#[cfg(test)]
mod tests {
    use kalends_calendar::{CalendarDate, FixedClock};
    use kalends_holiday::HolidayCalculator;

    use super::*;
    use crate::MonthGridBuilder;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_parts(y, m, d).unwrap()
    }

    #[test]
    fn march_2024_layout() {
        let grid = MonthGridBuilder::new(HolidayCalculator::default())
            .with_clock(FixedClock::new(ymd(2024, 3, 5)))
            .build(2024, 3)
            .unwrap();
        let text = render_text(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "         March 2024");
        assert_eq!(lines[1], " Mo  Tu  We  Th  Fr  Sa  Su");
        assert_eq!(lines[2], "                  1   2   3");
        assert_eq!(lines[3], "  4 [ 5]  6   7   8   9  10");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn lines_have_no_trailing_blanks() {
        let grid = MonthGridBuilder::new(HolidayCalculator::us_federal())
            .with_clock(FixedClock::new(ymd(2024, 12, 31)))
            .build(2024, 12)
            .unwrap();
        let text = render_text(&grid);
        assert!(text.ends_with('\n'));
        assert!(text.lines().all(|l| l == l.trim_end()));
        assert!(text.contains("* 2024-12-25 Christmas Day"));
        // Dec 30 and 31 are the only in-month days of the last week.
        assert!(text.contains(" 30 [31]\n"));
    }

    #[test]
    fn holidays_are_marked_and_listed() {
        let grid = MonthGridBuilder::new(HolidayCalculator::western_christian())
            .with_clock(FixedClock::new(ymd(2000, 1, 1)))
            .build(2024, 3)
            .unwrap();
        let text = render_text(&grid);
        assert!(text.contains(" 25  26  27  28  29* 30  31*"));
        assert!(text.contains("* 2024-03-29 Good Friday"));
        assert!(text.contains("* 2024-03-31 Easter Sunday"));
        // Easter Monday is April 1, outside the month.
        assert!(!text.contains("Easter Monday"));
    }
}
