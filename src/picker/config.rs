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

use crate::calendar::WeekStart;
use crate::calendar::format::WeekdayFormat;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Select Dates";
/// Default span from the minimum to the maximum date.
pub const DEFAULT_SPAN_MONTHS: u32 = 36;

/// Host-facing options. Every field is optional in the JSON config file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// First selectable day. Defaults to today.
    pub minimum_date: Option<NaiveDate>,
    /// Last selectable day. Defaults to `DEFAULT_SPAN_MONTHS` after the minimum.
    pub maximum_date: Option<NaiveDate>,
    /// Truncate the minimum to the 1st of its month.
    pub is_absolute_start_of_month: bool,
    /// Third tap clears the range, and Done works with nothing selected.
    pub enabled_set_no_dates: bool,
    pub title_text: Option<String>,
    pub selected_start_date: Option<NaiveDate>,
    pub selected_end_date: Option<NaiveDate>,
    pub week_start: WeekStart,
    pub weekday_format: WeekdayFormat,
}

impl PickerConfig {
    #[must_use]
    pub fn title(&self) -> &str {
        self.title_text.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}
