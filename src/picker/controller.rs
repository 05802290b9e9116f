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

use super::selection::{Selection, Transition};
use super::PickerDelegate;
use crate::calendar::{days_in_month, is_after, is_before, is_same_day};
use crate::error::PickerError;
use chrono::{Datelike, NaiveDate};

/// Inclusive `[minimum, maximum]` window of selectable days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    minimum: NaiveDate,
    maximum: NaiveDate,
}

impl DateBounds {
    pub fn new(minimum: NaiveDate, maximum: NaiveDate) -> Result<Self, PickerError> {
        if is_after(&minimum, &maximum) {
            return Err(PickerError::InvertedBounds { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
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
    pub fn contains(&self, date: NaiveDate) -> bool {
        !is_before(&date, &self.minimum) && !is_after(&date, &self.maximum)
    }

    #[must_use]
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.minimum, self.maximum)
    }
}

/// Which part of an interior cell the range band covers. Bands are drawn per
/// month, so the 1st and the last day of a month re-anchor their caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBand {
    Full,
    /// 1st of the month: band connects rightward only.
    RightHalf,
    /// Last day of the month: band connects leftward only.
    LeftHalf,
}

/// Render classification of a single day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    Disabled,
    RangeInterior(RangeBand),
    /// Start of a two-sided range.
    RangeLeftEdge,
    /// End of a two-sided range.
    RangeRightEdge,
    SelectedSingle,
    Today,
    Plain,
}

impl CellClass {
    #[must_use]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::RangeLeftEdge | Self::RangeRightEdge | Self::SelectedSingle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    /// Nothing selected and empty confirmation is not allowed.
    Rejected,
}

/// Owns the selection state and is the only place it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    bounds: DateBounds,
    selection: Selection,
    /// Enables clear-on-third-tap and confirming with nothing selected.
    enabled_set_no_dates: bool,
}

impl SelectionController {
    #[must_use]
    pub const fn new(bounds: DateBounds, selection: Selection, enabled_set_no_dates: bool) -> Self {
        Self { bounds, selection, enabled_set_no_dates }
    }

    #[must_use]
    pub const fn bounds(&self) -> DateBounds {
        self.bounds
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        self.selection.start()
    }

    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.selection.end()
    }

    #[must_use]
    pub const fn enabled_set_no_dates(&self) -> bool {
        self.enabled_set_no_dates
    }

    /// Handle a tap. `None` comes from label/blank cells.
    pub fn select_date(&mut self, date: Option<NaiveDate>) -> Transition {
        let Some(date) = date else {
            tracing::trace!("tap on non-day cell ignored");
            return Transition::Ignored;
        };
        if !self.bounds.contains(date) {
            tracing::debug!(%date, "tap outside bounds ignored");
            return Transition::Ignored;
        }
        let (next, transition) = self.selection.apply(date, self.enabled_set_no_dates);
        tracing::debug!(%date, ?transition, from = ?self.selection, to = ?next, "selection changed");
        self.selection = next;
        transition
    }

    /// Classification of `date` for rendering, recomputed on every call.
    #[must_use]
    pub fn classify(&self, date: NaiveDate, today: NaiveDate) -> CellClass {
        if !self.bounds.contains(date) {
            return CellClass::Disabled;
        }
        match self.selection {
            Selection::Range { start, end } if is_before(&start, &date) && is_before(&date, &end) => {
                CellClass::RangeInterior(band_for(date))
            }
            Selection::Range { start, end } if start != end && is_same_day(&date, &start) => {
                CellClass::RangeLeftEdge
            }
            Selection::Range { start, end } if start != end && is_same_day(&date, &end) => {
                CellClass::RangeRightEdge
            }
            Selection::Range { start, .. } | Selection::Anchored(start)
                if is_same_day(&date, &start) =>
            {
                CellClass::SelectedSingle
            }
            _ if is_same_day(&date, &today) => CellClass::Today,
            _ => CellClass::Plain,
        }
    }

    #[must_use]
    pub fn can_confirm(&self) -> bool {
        self.enabled_set_no_dates || !self.selection.is_empty()
    }

    /// Report the selection to `delegate` when the confirm gate allows it.
    pub fn confirm(&self, delegate: &mut dyn PickerDelegate) -> ConfirmOutcome {
        if !self.can_confirm() {
            tracing::debug!("confirm rejected: nothing selected");
            return ConfirmOutcome::Rejected;
        }
        delegate.did_pick_date_range(self.start(), self.end());
        ConfirmOutcome::Confirmed
    }

    pub fn cancel(&self, delegate: &mut dyn PickerDelegate) {
        delegate.did_cancel_picking_date_range();
    }
}

fn band_for(date: NaiveDate) -> RangeBand {
    if date.day() == 1 {
        RangeBand::RightHalf
    } else if date.day() == days_in_month(date) {
        RangeBand::LeftHalf
    } else {
        RangeBand::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{PickerOutcome, RecordingDelegate};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn controller(clearing: bool) -> SelectionController {
        let bounds = DateBounds::new(date(2024, 1, 1), date(2024, 3, 31)).unwrap();
        SelectionController::new(bounds, Selection::Empty, clearing)
    }

    #[test]
    fn bounds_reject_inversion() {
        assert_eq!(
            DateBounds::new(date(2024, 2, 1), date(2024, 1, 1)),
            Err(PickerError::InvertedBounds { minimum: date(2024, 2, 1), maximum: date(2024, 1, 1) })
        );
        assert!(DateBounds::new(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn worked_example_with_clearing_disabled() {
        let mut c = controller(false);
        assert_eq!(c.select_date(Some(date(2024, 2, 10))), Transition::Started);
        assert_eq!((c.start(), c.end()), (Some(date(2024, 2, 10)), None));
        assert_eq!(c.select_date(Some(date(2024, 2, 5))), Transition::Swapped);
        assert_eq!((c.start(), c.end()), (Some(date(2024, 2, 5)), Some(date(2024, 2, 10))));
        assert_eq!(c.select_date(Some(date(2024, 1, 1))), Transition::Restarted);
        assert_eq!((c.start(), c.end()), (Some(date(2024, 1, 1)), None));
    }

    #[test]
    fn third_tap_clears_when_enabled() {
        let mut c = controller(true);
        c.select_date(Some(date(2024, 1, 10)));
        c.select_date(Some(date(2024, 1, 20)));
        assert_eq!(c.select_date(Some(date(2024, 2, 1))), Transition::Cleared);
        assert_eq!(c.selection(), Selection::Empty);
    }

    #[test]
    fn out_of_bounds_and_blank_taps_never_change_state() {
        let mut c = controller(false);
        let outside = [date(2023, 12, 31), date(2024, 4, 1)];
        for step in [None, Some(date(2024, 1, 10)), Some(date(2024, 1, 20))] {
            if step.is_some() {
                c.select_date(step);
            }
            let before = c.clone();
            assert_eq!(c.select_date(None), Transition::Ignored);
            for day in outside {
                assert_eq!(c.select_date(Some(day)), Transition::Ignored);
            }
            assert_eq!(c, before);
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut c = controller(false);
        assert_eq!(c.select_date(Some(date(2024, 3, 31))), Transition::Started);
        assert_eq!(c.select_date(Some(date(2024, 1, 1))), Transition::Swapped);
    }

    #[test]
    fn classify_open_range() {
        let today = date(2024, 6, 1);
        let mut c = controller(false);
        c.select_date(Some(date(2024, 1, 30)));
        c.select_date(Some(date(2024, 2, 3)));

        assert_eq!(c.classify(date(2024, 1, 30), today), CellClass::RangeLeftEdge);
        assert_eq!(c.classify(date(2024, 1, 31), today), CellClass::RangeInterior(RangeBand::LeftHalf));
        assert_eq!(c.classify(date(2024, 2, 1), today), CellClass::RangeInterior(RangeBand::RightHalf));
        assert_eq!(c.classify(date(2024, 2, 2), today), CellClass::RangeInterior(RangeBand::Full));
        assert_eq!(c.classify(date(2024, 2, 3), today), CellClass::RangeRightEdge);
        assert_eq!(c.classify(date(2024, 2, 4), today), CellClass::Plain);
        assert_eq!(c.classify(date(2024, 4, 1), today), CellClass::Disabled);
    }

    #[test]
    fn classify_single_and_today() {
        let today = date(2024, 1, 15);
        let mut c = controller(false);
        assert_eq!(c.classify(today, today), CellClass::Today);

        c.select_date(Some(today));
        assert_eq!(c.classify(today, today), CellClass::SelectedSingle);

        c.select_date(Some(today));
        assert_eq!(c.selection(), Selection::Range { start: today, end: today });
        assert_eq!(c.classify(today, today), CellClass::SelectedSingle);
    }

    #[test]
    fn disabled_wins_over_today() {
        let c = controller(false);
        let today = date(2025, 1, 1);
        assert_eq!(c.classify(today, today), CellClass::Disabled);
    }

    #[test]
    fn confirm_gate() {
        let mut recorder = RecordingDelegate::default();
        let mut c = controller(false);
        assert!(!c.can_confirm());
        assert_eq!(c.confirm(&mut recorder), ConfirmOutcome::Rejected);
        assert_eq!(recorder.outcome, None);

        c.select_date(Some(date(2024, 2, 2)));
        assert_eq!(c.confirm(&mut recorder), ConfirmOutcome::Confirmed);
        assert_eq!(
            recorder.outcome,
            Some(PickerOutcome::Confirmed { start: Some(date(2024, 2, 2)), end: None })
        );
    }

    #[test]
    fn confirm_with_nothing_selected_when_allowed() {
        let mut recorder = RecordingDelegate::default();
        let c = controller(true);
        assert_eq!(c.confirm(&mut recorder), ConfirmOutcome::Confirmed);
        assert_eq!(recorder.outcome, Some(PickerOutcome::Confirmed { start: None, end: None }));
    }

    #[test]
    fn cancel_notifies_delegate() {
        let mut recorder = RecordingDelegate::default();
        controller(false).cancel(&mut recorder);
        assert_eq!(recorder.outcome, Some(PickerOutcome::Cancelled));
    }
}
