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

//! Range-selection state and the host-facing picker value.

mod config;
mod controller;
mod selection;

pub use config::{DEFAULT_SPAN_MONTHS, DEFAULT_TITLE, PickerConfig};
pub use controller::{CellClass, ConfirmOutcome, DateBounds, RangeBand, SelectionController};
pub use selection::{Selection, Transition};

use crate::calendar::format::{WeekdayFormat, month_label};
use crate::calendar::{CalendarGrid, start_of_month};
use crate::error::PickerError;
use chrono::{Months, NaiveDate};

/// Completion callbacks exposed to the host.
pub trait PickerDelegate {
    fn did_cancel_picking_date_range(&mut self);
    fn did_pick_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    Confirmed { start: Option<NaiveDate>, end: Option<NaiveDate> },
    Cancelled,
}

/// Delegate that keeps the last reported outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordingDelegate {
    pub outcome: Option<PickerOutcome>,
}

impl PickerDelegate for RecordingDelegate {
    fn did_cancel_picking_date_range(&mut self) {
        self.outcome = Some(PickerOutcome::Cancelled);
    }

    fn did_pick_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.outcome = Some(PickerOutcome::Confirmed { start, end });
    }
}

/// A configured picker: grid geometry plus selection controller.
#[derive(Debug, Clone)]
pub struct RangePicker {
    pub grid: CalendarGrid,
    pub controller: SelectionController,
    pub title: String,
    pub weekday_format: WeekdayFormat,
}

impl RangePicker {
    /// Resolve defaults against `today` and validate the result.
    ///
    /// The default maximum is computed from the minimum before it is truncated
    /// to the start of its month.
    pub fn new(config: &PickerConfig, today: NaiveDate) -> Result<Self, PickerError> {
        let minimum = config.minimum_date.unwrap_or(today);
        let maximum = config.maximum_date.unwrap_or_else(|| default_maximum(minimum));
        let minimum =
            if config.is_absolute_start_of_month { start_of_month(minimum) } else { minimum };

        let bounds = DateBounds::new(minimum, maximum)?;
        let selection = Selection::from_parts(config.selected_start_date, config.selected_end_date)?;
        let controller = SelectionController::new(bounds, selection, config.enabled_set_no_dates);
        let grid = CalendarGrid::new(minimum, maximum, config.week_start);

        tracing::info!(
            %minimum,
            %maximum,
            sections = grid.section_count(),
            enabled_set_no_dates = config.enabled_set_no_dates,
            "picker configured"
        );

        Ok(Self {
            grid,
            controller,
            title: config.title().to_owned(),
            weekday_format: config.weekday_format,
        })
    }

    /// Section to bring into view: the selected start, otherwise today.
    /// `None` when that month is not part of the grid.
    #[must_use]
    pub fn scroll_target_section(&self, today: NaiveDate) -> Option<usize> {
        let target = self.controller.start().unwrap_or(today);
        self.grid.section_for_date(target)
    }

    #[must_use]
    pub fn month_label(&self, section: usize) -> Option<String> {
        self.grid.first_date_of_section(section).map(month_label)
    }
}

fn default_maximum(minimum: NaiveDate) -> NaiveDate {
    minimum.checked_add_months(Months::new(DEFAULT_SPAN_MONTHS)).unwrap_or(NaiveDate::MAX)
}
