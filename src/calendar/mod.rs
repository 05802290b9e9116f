// range-picker - A terminal calendar for picking a date range
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Month-paginated calendar grid math.
//!
//! Every section of the grid is one calendar month laid out as a flat list of
//! items: a row of seven weekday labels, then blank filler cells up to the
//! weekday column of the 1st, then one cell per day. Section 0 is the month
//! that contains the minimum date. Everything here is a pure function of its
//! inputs.

pub mod format;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;
/// Synthetic weekday-label cells at the top of every section.
pub const WEEKDAY_ROW_ITEMS: usize = DAYS_PER_WEEK;

/// Which weekday occupies the first grid column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// ISO 8601 weeks.
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Sunday => Weekday::Sun,
        }
    }
}

/// Position of a cell inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCoordinate {
    pub section: usize,
    pub item: usize,
}

impl GridCoordinate {
    #[must_use]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Zero-based visual row inside the section (row 0 holds weekday labels).
    #[must_use]
    pub const fn row(self) -> usize {
        self.item / DAYS_PER_WEEK
    }

    #[must_use]
    pub const fn column(self) -> usize {
        self.item % DAYS_PER_WEEK
    }
}

/// What a single grid item shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    WeekdayLabel(Weekday),
    Blank,
    Day(NaiveDate),
    /// Past the last item of the section, or the section itself is past the
    /// representable calendar.
    OutOfRange,
}

// ---------------------------------------------------------------------------
// Day-granularity helpers
// ---------------------------------------------------------------------------

fn day_key<D: Datelike>(date: &D) -> (i32, u32) {
    (date.year(), date.ordinal())
}

/// `a` falls on an earlier calendar day than `b`. Time of day is ignored.
pub fn is_before<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    day_key(a) < day_key(b)
}

/// `a` falls on a later calendar day than `b`. Time of day is ignored.
pub fn is_after<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    day_key(a) > day_key(b)
}

/// `a` and `b` fall on the same calendar day. Time of day is ignored.
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    day_key(a) == day_key(b)
}

/// Truncate a wall-clock instant to its calendar day.
#[must_use]
pub fn calendar_day(instant: NaiveDateTime) -> NaiveDate {
    instant.date()
}

/// The current calendar day in the local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Month arithmetic
// ---------------------------------------------------------------------------

#[allow(clippy::cast_possible_wrap)]
fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    u32::from(date.num_days_in_month())
}

#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[must_use]
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date)).unwrap_or(date)
}

/// Whole months elapsed from `from` to `to`.
///
/// A month only counts once its day-of-month has been reached, so
/// Jan 31 -> Feb 29 is zero whole months. Negative when `to` precedes `from`.
#[must_use]
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let raw = month_index(to) - month_index(from);
    if raw > 0 && to.day() < from.day() {
        raw - 1
    } else if raw < 0 && to.day() > from.day() {
        raw + 1
    } else {
        raw
    }
}

// ---------------------------------------------------------------------------
// Grid indexing
// ---------------------------------------------------------------------------

/// Number of month sections spanned by `from..=to`. At least 1 when `from <= to`,
/// zero when the range is inverted.
#[must_use]
pub fn section_count(from: NaiveDate, to: NaiveDate) -> usize {
    usize::try_from(months_between(from, to) + 1).unwrap_or(0)
}

/// 1st day of the month `section` months after the month containing `minimum`.
/// `None` only when that month is outside chrono's representable range.
#[must_use]
pub fn first_date_of_section(minimum: NaiveDate, section: usize) -> Option<NaiveDate> {
    let months = u32::try_from(section).ok()?;
    start_of_month(minimum).checked_add_months(Months::new(months))
}

/// 1-based column of the 1st of `date`'s month, counted from `week_start`.
#[must_use]
pub fn weekday_offset(date: NaiveDate, week_start: WeekStart) -> u32 {
    let first = start_of_month(date).weekday().num_days_from_monday();
    let origin = week_start.weekday().num_days_from_monday();
    (first + 7 - origin) % 7 + 1
}

/// Filler cells between the weekday row and the 1st of the month.
#[must_use]
pub fn blank_items(date: NaiveDate, week_start: WeekStart) -> usize {
    weekday_offset(date, week_start) as usize - 1
}

/// Weekday shown in grid column `column` (wraps every seven columns).
#[must_use]
pub fn weekday_for_column(column: usize, week_start: WeekStart) -> Weekday {
    let mut weekday = week_start.weekday();
    for _ in 0..column % DAYS_PER_WEEK {
        weekday = weekday.succ();
    }
    weekday
}

/// Items in `section`: weekday row + blanks + days. Zero for an unrepresentable
/// section.
#[must_use]
pub fn item_count(minimum: NaiveDate, section: usize, week_start: WeekStart) -> usize {
    first_date_of_section(minimum, section).map_or(0, |first| {
        WEEKDAY_ROW_ITEMS + blank_items(first, week_start) + days_in_month(first) as usize
    })
}

/// Date shown by `item` of `section`, or `None` for weekday labels, blanks and
/// items past the end of the month.
#[must_use]
pub fn date_for_item(
    minimum: NaiveDate,
    section: usize,
    item: usize,
    week_start: WeekStart,
) -> Option<NaiveDate> {
    let first = first_date_of_section(minimum, section)?;
    let leading = WEEKDAY_ROW_ITEMS + blank_items(first, week_start);
    if item < leading {
        return None;
    }
    let day_of_month = u32::try_from(item - leading + 1).ok()?;
    first.with_day(day_of_month)
}

/// Inverse of [`date_for_item`]. `None` for dates before the month of `minimum`.
#[must_use]
pub fn coordinate_for_date(
    minimum: NaiveDate,
    date: NaiveDate,
    week_start: WeekStart,
) -> Option<GridCoordinate> {
    let section = usize::try_from(month_index(date) - month_index(minimum)).ok()?;
    let item = WEEKDAY_ROW_ITEMS + blank_items(date, week_start) + date.day0() as usize;
    Some(GridCoordinate { section, item })
}

#[must_use]
pub fn cell_at(
    minimum: NaiveDate,
    section: usize,
    item: usize,
    week_start: WeekStart,
) -> GridCell {
    let Some(first) = first_date_of_section(minimum, section) else {
        return GridCell::OutOfRange;
    };
    if item < WEEKDAY_ROW_ITEMS {
        return GridCell::WeekdayLabel(weekday_for_column(item, week_start));
    }
    if item < WEEKDAY_ROW_ITEMS + blank_items(first, week_start) {
        return GridCell::Blank;
    }
    date_for_item(minimum, section, item, week_start).map_or(GridCell::OutOfRange, GridCell::Day)
}

/// The indexing functions bound to one `(minimum, maximum, week_start)` triple.
///
/// Section counting always runs from the 1st of the minimum month to the last
/// day of the maximum month, so the months holding both bounds are always
/// present regardless of their day-of-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarGrid {
    minimum: NaiveDate,
    maximum: NaiveDate,
    week_start: WeekStart,
}

impl CalendarGrid {
    #[must_use]
    pub const fn new(minimum: NaiveDate, maximum: NaiveDate, week_start: WeekStart) -> Self {
        Self { minimum, maximum, week_start }
    }

    #[must_use]
    pub const fn minimum(&self) -> NaiveDate {
        self.minimum
    }

    #[must_use]
    pub const fn maximum(&self) -> NaiveDate {
        self.maximum
    }

    #[must_use]
    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        section_count(start_of_month(self.minimum), end_of_month(self.maximum))
    }

    #[must_use]
    pub fn first_date_of_section(&self, section: usize) -> Option<NaiveDate> {
        if section >= self.section_count() {
            return None;
        }
        first_date_of_section(self.minimum, section)
    }

    #[must_use]
    pub fn item_count(&self, section: usize) -> usize {
        if section >= self.section_count() {
            return 0;
        }
        item_count(self.minimum, section, self.week_start)
    }

    /// Visual rows in `section`, including the weekday-label row.
    #[must_use]
    pub fn row_count(&self, section: usize) -> usize {
        self.item_count(section).div_ceil(DAYS_PER_WEEK)
    }

    #[must_use]
    pub fn cell_at(&self, section: usize, item: usize) -> GridCell {
        if item >= self.item_count(section) {
            return GridCell::OutOfRange;
        }
        cell_at(self.minimum, section, item, self.week_start)
    }

    #[must_use]
    pub fn date_for_item(&self, section: usize, item: usize) -> Option<NaiveDate> {
        match self.cell_at(section, item) {
            GridCell::Day(date) => Some(date),
            _ => None,
        }
    }

    #[must_use]
    pub fn coordinate_for_date(&self, date: NaiveDate) -> Option<GridCoordinate> {
        coordinate_for_date(self.minimum, date, self.week_start)
            .filter(|coord| coord.section < self.section_count())
    }

    #[must_use]
    pub fn section_for_date(&self, date: NaiveDate) -> Option<usize> {
        self.coordinate_for_date(date).map(|coord| coord.section)
    }
}
