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

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Width of the weekday names shown in each section's label row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayFormat {
    /// "M"
    Narrow,
    /// "Mo"
    #[default]
    Short,
    /// "Mon"
    Abbreviated,
}

/// Section header text, e.g. "February 2024".
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

#[must_use]
pub fn weekday_label(weekday: Weekday, format: WeekdayFormat) -> String {
    let name = weekday.to_string();
    let take = match format {
        WeekdayFormat::Narrow => 1,
        WeekdayFormat::Short => 2,
        WeekdayFormat::Abbreviated => 3,
    };
    name.chars().take(take).collect()
}

/// Human-readable single date, e.g. "Feb 5, 2024".
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_label_uses_full_month_and_year() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 17).unwrap();
        assert_eq!(month_label(date), "February 2024");
    }

    #[test]
    fn weekday_label_widths() {
        assert_eq!(weekday_label(Weekday::Thu, WeekdayFormat::Narrow), "T");
        assert_eq!(weekday_label(Weekday::Thu, WeekdayFormat::Short), "Th");
        assert_eq!(weekday_label(Weekday::Thu, WeekdayFormat::Abbreviated), "Thu");
    }

    #[test]
    fn short_date_drops_leading_zero() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert_eq!(short_date(date), "Feb 5, 2024");
    }
}
