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

use chrono::NaiveDate;

/// Rejected picker construction. The grid math assumes a non-negative month
/// span and an ordered selection, so these fail fast.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    #[error("minimum date {minimum} is after maximum date {maximum}")]
    InvertedBounds { minimum: NaiveDate, maximum: NaiveDate },
    #[error("selected start date {start} is after selected end date {end}")]
    InvertedSelection { start: NaiveDate, end: NaiveDate },
    #[error("selected end date {end} given without a start date")]
    EndWithoutStart { end: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid configuration")]
    InvalidConfig,
    #[error("Invalid date bounds")]
    InvalidBounds,
    #[error("Date selection cancelled")]
    Cancelled,
}

impl AppError {
    pub const INVALID_CONFIG_EXIT_CODE: i32 = 20;
    pub const INVALID_BOUNDS_EXIT_CODE: i32 = 21;
    pub const CANCELLED_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig => Self::INVALID_CONFIG_EXIT_CODE,
            Self::InvalidBounds => Self::INVALID_BOUNDS_EXIT_CODE,
            Self::Cancelled => Self::CANCELLED_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidConfig => {
                "The configuration file could not be read. Check the path and JSON syntax."
            }
            Self::InvalidBounds => {
                "The requested dates are inconsistent. The minimum must not be after the maximum, \
and a selected end needs an earlier or equal start."
            }
            Self::Cancelled => "Date selection cancelled.",
        }
    }

    /// Whether the failure deserves the underlying error chain on stderr.
    #[must_use]
    pub fn shows_detail(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl From<&PickerError> for AppError {
    fn from(_: &PickerError) -> Self {
        Self::InvalidBounds
    }
}
