// =====
// TESTS: 4
// =====
//
// Calendar-grid index properties over a spread of bounds.

use pretty_assertions::assert_eq;
use range_picker::calendar::{self, CalendarGrid, GridCell, WeekStart};

use crate::helpers::date;

fn sample_bounds() -> Vec<(chrono::NaiveDate, chrono::NaiveDate)> {
    vec![
        (date(2024, 1, 1), date(2024, 1, 1)),
        (date(2024, 1, 31), date(2024, 2, 1)),
        (date(2023, 12, 15), date(2024, 3, 2)),
        (date(1999, 11, 30), date(2001, 3, 1)),
        (date(2024, 2, 29), date(2027, 2, 28)),
    ]
}

#[test]
fn section_count_is_positive_and_one_within_a_month() {
    for (min, max) in sample_bounds() {
        assert!(calendar::section_count(min, max) >= 1, "{min}..{max}");
    }
    assert_eq!(calendar::section_count(date(2024, 5, 2), date(2024, 5, 30)), 1);
}

#[test]
fn every_day_cell_round_trips_through_its_coordinate() {
    for week_start in [WeekStart::Monday, WeekStart::Sunday] {
        for (min, max) in sample_bounds() {
            let grid = CalendarGrid::new(min, max, week_start);
            for section in 0..grid.section_count() {
                for item in 0..grid.item_count(section) {
                    let Some(day) = grid.date_for_item(section, item) else {
                        continue;
                    };
                    let coord = grid.coordinate_for_date(day).expect("day inside grid");
                    assert_eq!((coord.section, coord.item), (section, item));
                }
            }
        }
    }
}

#[test]
fn each_section_has_seven_labels_then_blanks_then_every_day() {
    let grid = CalendarGrid::new(date(2023, 12, 15), date(2024, 3, 2), WeekStart::Sunday);
    for section in 0..grid.section_count() {
        let first = grid.first_date_of_section(section).expect("section in range");
        let blanks = calendar::weekday_offset(first, WeekStart::Sunday) as usize - 1;
        let cells: Vec<GridCell> =
            (0..grid.item_count(section)).map(|i| grid.cell_at(section, i)).collect();
        assert!(cells[..7].iter().all(|c| matches!(c, GridCell::WeekdayLabel(_))));
        assert!(cells[7..7 + blanks].iter().all(|c| *c == GridCell::Blank));
        let days = cells[7 + blanks..].iter().filter(|c| matches!(c, GridCell::Day(_))).count();
        assert_eq!(days, calendar::days_in_month(first) as usize);
    }
}

#[test]
fn leap_february_starts_on_thursday() {
    let feb = date(2024, 2, 1);
    assert_eq!(calendar::days_in_month(feb), 29);
    assert_eq!(calendar::weekday_offset(feb, WeekStart::Monday) - 1, 3);
    assert_eq!(calendar::weekday_offset(feb, WeekStart::Sunday) - 1, 4);
}
