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

use crate::calendar::is_before;
use crate::error::PickerError;
use chrono::NaiveDate;

/// Start/end pair being built by taps.
///
/// An end without a start and an end before its start are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    /// One endpoint chosen.
    Anchored(NaiveDate),
    /// Both endpoints chosen, `start <= end`.
    Range { start: NaiveDate, end: NaiveDate },
}

/// Which transition a tap produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Tap on a non-day cell or outside the bounds; nothing changed.
    Ignored,
    /// Empty -> anchored at the tapped day.
    Started,
    /// Anchored -> range ending at the tapped day.
    Completed,
    /// Anchored -> range, tapped day before the anchor becomes the new start.
    Swapped,
    /// Range -> empty (clear-on-third-tap).
    Cleared,
    /// Range -> anchored at the tapped day.
    Restarted,
}

impl Selection {
    /// Build a selection from optional endpoints, as seeded by configuration.
    pub fn from_parts(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, PickerError> {
        match (start, end) {
            (None, None) => Ok(Self::Empty),
            (Some(start), None) => Ok(Self::Anchored(start)),
            (None, Some(end)) => Err(PickerError::EndWithoutStart { end }),
            (Some(start), Some(end)) if is_before(&end, &start) => {
                Err(PickerError::InvertedSelection { start, end })
            }
            (Some(start), Some(end)) => Ok(Self::Range { start, end }),
        }
    }

    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        match *self {
            Self::Empty => None,
            Self::Anchored(start) | Self::Range { start, .. } => Some(start),
        }
    }

    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        match *self {
            Self::Range { end, .. } => Some(end),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Advance the three-phase cycle with an in-bounds tapped day.
    #[must_use]
    pub fn apply(self, date: NaiveDate, clear_on_third_tap: bool) -> (Self, Transition) {
        match self {
            Self::Empty => (Self::Anchored(date), Transition::Started),
            Self::Anchored(start) if is_before(&date, &start) => {
                (Self::Range { start: date, end: start }, Transition::Swapped)
            }
            Self::Anchored(start) => (Self::Range { start, end: date }, Transition::Completed),
            Self::Range { .. } if clear_on_third_tap => (Self::Empty, Transition::Cleared),
            Self::Range { .. } => (Self::Anchored(date), Transition::Restarted),
        }
    }
}
