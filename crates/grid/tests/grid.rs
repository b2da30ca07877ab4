use kalends_calendar::{CalendarDate, FixedClock};
use kalends_grid::{CalendarGrid, MonthGridBuilder};
use kalends_holiday::HolidayCalculator;

fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_parts(y, m, d).unwrap()
}

fn march_2024() -> CalendarGrid {
    MonthGridBuilder::new(HolidayCalculator::us_federal())
        .with_clock(FixedClock::new(ymd(2024, 3, 5)))
        .build(2024, 3)
        .unwrap()
}

#[test]
fn weeks_cover_the_month() {
    let grid = march_2024();
    assert_eq!(grid.year(), 2024);
    assert_eq!(grid.month(), 3);
    assert_eq!(grid.weeks().len(), 5);
    assert_eq!(grid.weeks()[0].monday(), ymd(2024, 2, 26));
    assert_eq!(grid.weeks()[4].cells[6].date, ymd(2024, 3, 31));

    let in_month: Vec<_> = grid.cells().filter(|c| c.in_month).map(|c| c.date).collect();
    assert_eq!(in_month.len(), 31);
    assert_eq!(in_month[0], ymd(2024, 3, 1));
    assert_eq!(in_month[30], ymd(2024, 3, 31));

    let leading: Vec<_> = grid.cells().take_while(|c| !c.in_month).map(|c| c.date).collect();
    assert_eq!(
        leading,
        vec![ymd(2024, 2, 26), ymd(2024, 2, 27), ymd(2024, 2, 28), ymd(2024, 2, 29)]
    );
}

#[test]
fn cells_are_contiguous_and_monday_first() {
    let grid = march_2024();
    let dates: Vec<_> = grid.cells().map(|c| c.date).collect();
    assert!(dates.windows(2).all(|w| w[0].add_days(1) == w[1]));
    for week in grid.weeks() {
        assert_eq!(week.cells[0].date.day_of_week(), 1);
        assert!(week.cells[5].is_weekend && week.cells[6].is_weekend);
        assert!(week.cells[..5].iter().all(|c| !c.is_weekend));
    }
}

#[test]
fn exactly_one_today() {
    let grid = march_2024();
    let today: Vec<_> = grid.cells().filter(|c| c.is_today).collect();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].date, ymd(2024, 3, 5));
}

#[test]
fn holidays_across_year_boundary() {
    // December 2024 ends on a Tuesday; the grid runs into January 2025.
    let grid = MonthGridBuilder::new(HolidayCalculator::us_federal())
        .with_clock(FixedClock::new(ymd(2024, 12, 1)))
        .build(2024, 12)
        .unwrap();
    let christmas = grid.cell(ymd(2024, 12, 25)).unwrap();
    assert_eq!(christmas.holiday_name.as_deref(), Some("Christmas Day"));
    let new_year = grid.cell(ymd(2025, 1, 1)).unwrap();
    assert!(!new_year.in_month);
    assert!(new_year.is_holiday);
}

#[test]
fn serializes_to_json() {
    let grid = march_2024();
    let json = serde_json::to_value(&grid).unwrap();
    assert_eq!(json["year"], 2024);
    assert_eq!(json["month"], 3);
    let weeks = json["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 5);
    let first = &weeks[0][0];
    assert_eq!(first["date"], "2024-02-26");
    assert_eq!(first["in_month"], false);
    assert!(first.get("holiday_name").is_none());
    assert_eq!(weeks[1][1]["is_today"], true);
}
